//! In-memory jobs source with generated listings.
//!
//! The live endpoint returns errors sometimes, so the demo and the controller
//! tests can run against this instead.

use rand::Rng;
use tojob_core::{Company, Job};

use crate::{JobsSource, QueryError};

const CHAR_POOL: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub struct FakeJobsSource;

#[async_trait::async_trait]
impl JobsSource for FakeJobsSource {
    async fn jobs_by_type(&self, _job_type: &str) -> Result<Vec<Job>, QueryError> {
        Ok(fake_job_list())
    }
}

fn random_string(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| CHAR_POOL[rng.gen_range(0..CHAR_POOL.len())] as char)
        .collect()
}

fn fake_company() -> Company {
    Company {
        name: random_string(8),
        logo_url: "https://logo.clearbit.com/segment.com?size=200".to_string(),
    }
}

fn fake_job() -> Job {
    let description_len = rand::thread_rng().gen_range(100..200);
    Job {
        title: random_string(20),
        description: Some(random_string(description_len)),
        company: Some(fake_company()),
    }
}

pub fn fake_job_list() -> Vec<Job> {
    let count = rand::thread_rng().gen_range(30..60);
    (0..count).map(|_| fake_job()).collect()
}
