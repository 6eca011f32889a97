use crate::domain::model::{AvailabilityCategory, Course, ReportResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// 空集合代表不過濾；無法解析的類別回傳錯誤
    fn category_filter(&self) -> Result<Vec<AvailabilityCategory>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Course>>;
    async fn transform(&self, courses: Vec<Course>) -> Result<ReportResult>;
    async fn load(&self, result: ReportResult) -> Result<String>;
}
