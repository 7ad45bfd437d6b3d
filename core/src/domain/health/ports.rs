use std::future::Future;

use crate::domain::health::entities::ReadinessStatus;

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = ReadinessStatus> + Send;
}
