use crate::errors::{OpenTrainError, OpenTrainResult};
use crate::transport::{BoxStream, ResponseParser};
use bytes::Bytes;
use futures::{future, Stream, StreamExt};
use pin_project_lite::pin_project;
use reqwest::Response;
use serde_json::Value;
use std::pin::Pin;
use std::task::{Context, Poll};

const DONE_MARKER: &str = "[DONE]";

pub struct StreamHandler;

impl StreamHandler {
    /// Turns an event-stream response into a stream of JSON payloads that ends
    /// at the `[DONE]` marker or when the server closes the connection.
    pub async fn handle_stream(response: Response) -> OpenTrainResult<BoxStream<Value>> {
        if !response.status().is_success() {
            return Err(ResponseParser::error_from(response).await);
        }

        Ok(Self::decode(response.bytes_stream()))
    }

    pub fn decode<S, E>(chunks: S) -> BoxStream<Value>
    where
        S: Stream<Item = Result<Bytes, E>> + Send + 'static,
        E: Into<OpenTrainError>,
    {
        let events = SseStream::new(chunks)
            .take_while(|item| future::ready(!matches!(item, Ok(event) if event.is_done())))
            .filter_map(|item| async move {
                match item {
                    Ok(event) if event.data.is_empty() => None,
                    Ok(event) => Some(event.parse()),
                    Err(e) => Some(Err(e)),
                }
            });

        Box::pin(events)
    }
}

pin_project! {
    /// Splits a byte stream into SSE events. Ends for good after the first
    /// transport error or the end of the body.
    pub struct SseStream<S> {
        #[pin]
        inner: S,
        buffer: Vec<u8>,
        done: bool,
    }
}

impl<S, E> SseStream<S>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<OpenTrainError>,
{
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            done: false,
        }
    }
}

impl<S, E> Stream for SseStream<S>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<OpenTrainError>,
{
    type Item = OpenTrainResult<SseEvent>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            // a single chunk may carry several events
            if let Some(pos) = this.buffer.windows(2).position(|w| w == b"\n\n") {
                let event_data = this.buffer.drain(..pos + 2).collect::<Vec<_>>();
                return Poll::Ready(Some(Ok(SseEvent::from_bytes(&event_data))));
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => {
                    this.buffer.extend_from_slice(&chunk);
                }
                Poll::Ready(Some(Err(e))) => {
                    *this.done = true;
                    this.buffer.clear();
                    return Poll::Ready(Some(Err(e.into())));
                }
                Poll::Ready(None) => {
                    *this.done = true;
                    if this.buffer.iter().all(|b| b.is_ascii_whitespace()) {
                        this.buffer.clear();
                        return Poll::Ready(None);
                    }
                    let event_data = this.buffer.drain(..).collect::<Vec<_>>();
                    return Poll::Ready(Some(Ok(SseEvent::from_bytes(&event_data))));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SseEvent {
    pub event_type: Option<String>,
    pub data: String,
    pub id: Option<String>,
}

impl SseEvent {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        let mut event_type = None;
        let mut data_lines = Vec::new();
        let mut id = None;

        for line in text.lines() {
            if line.is_empty() || line.starts_with(':') {
                continue;
            }

            if let Some(stripped) = line.strip_prefix("event:") {
                event_type = Some(stripped.trim().to_string());
            } else if let Some(stripped) = line.strip_prefix("data:") {
                data_lines.push(stripped.trim());
            } else if let Some(stripped) = line.strip_prefix("id:") {
                id = Some(stripped.trim().to_string());
            }
        }

        Self {
            event_type,
            data: data_lines.join("\n"),
            id,
        }
    }

    pub fn is_done(&self) -> bool {
        self.data == DONE_MARKER
    }

    pub fn parse(&self) -> OpenTrainResult<Value> {
        ResponseParser::parse_json(self.data.as_bytes())
    }
}
