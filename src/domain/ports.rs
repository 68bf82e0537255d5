use crate::utils::error::Result;

/// Destination for the rendered report.
pub trait ReportStore: Send + Sync {
    /// Replaces any previous report with `report`.
    fn write_report(&self, report: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    fn read_report(&self) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Human-readable location, used in log and terminal messages.
    fn location(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn quit_token(&self) -> &str;
}
