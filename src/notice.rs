//! Bilingual (Chinese / English) user-facing notices.
//!
//! The labels are literal text shown to operators; there is no translation
//! layer behind them.

pub const MISSING_FILE_NAME: &str = "请选择文件! Warning, File name is empty!";
pub const MISSING_DOC_TYPE: &str = "请选择文件类型! Warning, Select correct doc type!";
pub const MISSING_DATE: &str = "请填写文件日期! Warning, Date from is empty!";
pub const EMPTY_MODEL_TABLE: &str = "请添加型号代码! Warning, No model code in the table!";
pub const INVALID_FILE: &str = "请选择一个有效的文件! Warning, Please select a valid file first!";

/// Success notice after an export.
pub fn exported(path: &std::path::Path) -> String {
    format!(
        "数据已成功导出到 {0} / Data exported to {0}",
        path.display()
    )
}

/// Success notice after a clipboard copy.
pub fn copied(rows: usize) -> String {
    format!("已复制 {rows} 行数据! Copied {rows} rows!")
}
