pub mod draw;
pub mod error;
pub mod io;
pub mod namespace;
pub mod params;
pub mod record;
pub mod sampler;
pub mod scan;
pub mod subsample_dict;
pub mod summary;
pub mod utils;

pub use error::{Result, SubsampleError};
pub use namespace::Namespace;
pub use params::SubsampleParams;
pub use subsample_dict::{MinCountStore, SubsampleDict};
