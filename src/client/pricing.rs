use log::info;

use super::{ApiClient, RequestOptions};
use crate::{
    error::{Error, Result},
    tasks::Task,
};

const PRICING_PATH: &str = "/pricing/compute";

/// Query of the cost quote for the given job shape, in the order the backend
/// documents it.
fn pricing_query(
    username: &str,
    task: Task,
    num_samples: u64,
    num_models: u32,
) -> Vec<(&'static str, String)> {
    vec![
        ("username", username.to_string()),
        ("task_id", task.id().to_string()),
        ("num_samples", num_samples.to_string()),
        ("num_models", num_models.to_string()),
    ]
}

impl ApiClient {
    /// Asks the backend what a job would cost.
    ///
    /// # Errors
    /// `UnknownTask` before any request if `task` is not registered,
    /// `UpstreamShape` if the answer has no numeric `price`, plus the errors of
    /// [`ApiClient::get_with`].
    pub fn get_project_cost(
        &self,
        username: &str,
        token: &str,
        task: &str,
        num_samples: u64,
        num_models: u32,
    ) -> Result<f64> {
        info!("Getting project cost...");
        let task: Task = task.parse()?;

        let options = RequestOptions {
            query: pricing_query(username, task, num_samples, num_models),
            ..RequestOptions::default()
        };
        let pricing = self.get_with(PRICING_PATH, token, &options)?;
        let body: serde_json::Value = pricing.json()?;

        body.get("price")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| Error::UpstreamShape(format!("no numeric price in {body}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_carries_task_id() {
        let query = pricing_query("bob", Task::Dreambooth, 12, 1);
        assert_eq!(
            query,
            [
                ("username", "bob".to_string()),
                ("task_id", "25".to_string()),
                ("num_samples", "12".to_string()),
                ("num_models", "1".to_string()),
            ]
        );
    }

    #[test]
    fn username_is_kept_verbatim_for_encoding() {
        let query = pricing_query("a#b&c", Task::TextBinaryClassification, 100, 3);
        assert_eq!(query[0], ("username", "a#b&c".to_string()));
        assert_eq!(query[1], ("task_id", "1".to_string()));
    }
}
