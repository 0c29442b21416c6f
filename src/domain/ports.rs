use crate::domain::model::{CvResponse, Department, Employee};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can deliver CVs and the people they belong to.
#[async_trait]
pub trait CvSource: Send + Sync {
    async fn get_employees(&self) -> Result<Vec<Employee>>;

    async fn get_cv(&self, user_id: &str, cv_id: &str) -> Result<CvResponse>;

    /// Employees paired with their default CV, fetched one at a time.
    /// Employees without a default CV are left out.
    async fn get_department(&self) -> Result<Department> {
        let mut department = Vec::new();
        for employee in self.get_employees().await? {
            let Some(cv_id) = employee.default_cv_id.clone() else {
                tracing::debug!("Skipping {} without a default CV", employee.user_id);
                continue;
            };
            let cv = self.get_cv(&employee.user_id, &cv_id).await?;
            department.push((employee, cv));
        }
        Ok(department)
    }
}
