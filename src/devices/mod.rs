mod stream;

pub use stream::{NullIO, StreamIO};
