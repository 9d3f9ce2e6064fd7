//! TypeScript file generators.

mod api_types_ts;
mod use_api_service_ts;
mod use_api_ts;

pub use api_types_ts::{ApiTypesTs, EndpointTypes};
pub use use_api_service_ts::UseApiServiceTs;
pub use use_api_ts::UseApiTs;
