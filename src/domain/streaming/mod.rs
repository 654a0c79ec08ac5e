use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::pin::Pin;

/// Mid-transfer read failure. Distinct from an upstream call that fails
/// before producing any bytes - that is reported as a structured error
/// response, never as a truncated audio body.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("stream read failed: {0}")]
pub struct StreamReadError(pub String);

/// Boxed chunk stream handed between the provider layer and the relay.
pub type AudioStream = Pin<Box<dyn Stream<Item = Result<Bytes, StreamReadError>> + Send>>;

/// Fully drains `source` chunk by chunk into one contiguous buffer.
///
/// Chunks are concatenated in arrival order, so the result equals the exact
/// byte sequence of the source. Used when the caller needs a complete file
/// with a known `Content-Length`. The stream handle is released on every
/// exit path, including a mid-stream error.
pub async fn relay_buffered<S, E>(source: S) -> Result<Vec<u8>, StreamReadError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    let mut source = std::pin::pin!(source);
    let mut buffer = Vec::new();

    while let Some(chunk) = source.next().await {
        let chunk = chunk.map_err(|e| StreamReadError(e.to_string()))?;
        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer)
}

/// Re-emits `source` chunk by chunk without waiting for the whole stream.
///
/// Each chunk is forwarded before the next one is read, in source order with
/// no batching; backpressure is implicit because the consumer's pull drives
/// the next upstream read. The output closes when the source signals
/// end-of-stream, and a source error becomes an abrupt output error rather
/// than a silent truncation.
pub fn relay_chunked<S, E>(source: S) -> impl Stream<Item = Result<Bytes, StreamReadError>> + Send
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    async_stream::try_stream! {
        let mut source = std::pin::pin!(source);
        while let Some(chunk) = source.next().await {
            let chunk = chunk.map_err(|e| StreamReadError(e.to_string()))?;
            yield chunk;
        }
    }
}
