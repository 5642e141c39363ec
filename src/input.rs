// Greeter - Input sources (stdin and in-memory)

use async_trait::async_trait;
use crossterm::tty::IsTty;
use std::io::Read;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::Instant;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("no input arrived within {0:?}")]
    TimedOut(Duration),
}

// ---------------------------------------------------------------------------
// InputSource trait
// ---------------------------------------------------------------------------

/// A stream the greeting name can be read from.
#[async_trait]
pub trait InputSource: Send {
    /// Whether the stream is attached to an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Read everything the stream has to offer. Called at most once per
    /// resolution; later calls yield an empty buffer.
    async fn read_all(&mut self) -> Result<Vec<u8>, InputError>;
}

// ---------------------------------------------------------------------------
// StdinSource
// ---------------------------------------------------------------------------

pub struct StdinSource {
    timeout: Duration,
    consumed: bool,
}

impl StdinSource {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            consumed: false,
        }
    }
}

#[async_trait]
impl InputSource for StdinSource {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_tty()
    }

    async fn read_all(&mut self) -> Result<Vec<u8>, InputError> {
        if self.consumed {
            return Ok(Vec::new());
        }
        self.consumed = true;

        let buf = read_until_deadline(std::io::stdin(), self.timeout).await?;
        tracing::debug!(bytes = buf.len(), "read stdin");
        Ok(buf)
    }
}

const CHUNK_SIZE: usize = 8192;

/// Collect bytes from `reader` until EOF or until `timeout` elapses.
///
/// The blocking reads live on their own thread and stream chunks back, so a
/// producer that writes and then keeps the stream open still yields what it
/// wrote. Only a deadline with nothing received is `TimedOut`. A thread left
/// blocked past the deadline is detached and dies with the process.
pub async fn read_until_deadline<R>(reader: R, timeout: Duration) -> Result<Vec<u8>, InputError>
where
    R: Read + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    std::thread::Builder::new()
        .name("input-reader".into())
        .spawn(move || pump_chunks(reader, tx))?;

    let deadline = Instant::now() + timeout;
    let mut buf = Vec::new();
    loop {
        match tokio::time::timeout_at(deadline, rx.recv()).await {
            Ok(Some(Ok(chunk))) => buf.extend_from_slice(&chunk),
            Ok(Some(Err(e))) => {
                if buf.is_empty() {
                    return Err(e.into());
                }
                tracing::debug!(error = %e, bytes = buf.len(), "read failed after partial input");
                return Ok(buf);
            }
            Ok(None) => return Ok(buf),
            Err(_) if buf.is_empty() => return Err(InputError::TimedOut(timeout)),
            Err(_) => {
                tracing::debug!(bytes = buf.len(), "deadline reached with stream still open");
                return Ok(buf);
            }
        }
    }
}

fn pump_chunks<R: Read>(mut reader: R, tx: mpsc::UnboundedSender<std::io::Result<Vec<u8>>>) {
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return,
            Ok(n) => {
                if tx.send(Ok(chunk[..n].to_vec())).is_err() {
                    return;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// BufferSource
// ---------------------------------------------------------------------------

/// In-memory input, for embedding callers that already hold the payload.
#[derive(Debug, Clone, Default)]
pub struct BufferSource {
    data: Option<Vec<u8>>,
    terminal: bool,
}

impl BufferSource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Some(data.into()),
            terminal: false,
        }
    }

    /// A source that reports itself as an interactive terminal.
    pub fn terminal() -> Self {
        Self {
            data: None,
            terminal: true,
        }
    }
}

#[async_trait]
impl InputSource for BufferSource {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    async fn read_all(&mut self) -> Result<Vec<u8>, InputError> {
        Ok(self.data.take().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_buffer_source_reads_once() {
        let mut src = BufferSource::new(r#"{"name":"Ada"}"#);
        assert!(!src.is_terminal());
        assert_eq!(src.read_all().await.unwrap(), br#"{"name":"Ada"}"#.to_vec());
        assert!(src.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_terminal_source_is_empty() {
        let mut src = BufferSource::terminal();
        assert!(src.is_terminal());
        assert!(src.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_until_eof() {
        let data = vec![b'x'; CHUNK_SIZE * 2 + 17];
        let buf = read_until_deadline(std::io::Cursor::new(data.clone()), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(buf, data);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_keeps_data_when_stream_stays_open() {
        use std::io::Write;
        use std::os::unix::net::UnixStream;

        let (mut writer, reader) = UnixStream::pair().unwrap();
        writer.write_all(br#"{"name": "Ada"}"#).unwrap();
        writer.flush().unwrap();

        let buf = read_until_deadline(reader, Duration::from_millis(200)).await.unwrap();
        assert_eq!(buf, br#"{"name": "Ada"}"#.to_vec());
        drop(writer);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_silent_open_stream_times_out() {
        use std::os::unix::net::UnixStream;

        let (writer, reader) = UnixStream::pair().unwrap();
        let err = read_until_deadline(reader, Duration::from_millis(50)).await.unwrap_err();
        assert!(matches!(err, InputError::TimedOut(_)));
        drop(writer);
    }

    #[tokio::test]
    async fn test_read_error_without_data() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
            }
        }

        let err = read_until_deadline(Broken, Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn test_timeout_error_message() {
        let err = InputError::TimedOut(Duration::from_millis(250));
        assert_eq!(err.to_string(), "no input arrived within 250ms");
    }
}
