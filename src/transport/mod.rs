mod http_transport;
mod multipart;
mod response_parser;
mod stream_handler;

pub use http_transport::{HttpTransport, ReqwestTransport};
pub use multipart::MultipartBuilder;
pub use response_parser::ResponseParser;
pub use stream_handler::{SseEvent, SseStream, StreamHandler};

use crate::errors::OpenTrainResult;
use futures::Stream;
use std::pin::Pin;

pub type BoxStream<T> = Pin<Box<dyn Stream<Item = OpenTrainResult<T>> + Send>>;
