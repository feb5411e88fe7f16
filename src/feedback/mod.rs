//! Streamed AI feedback on a filtered view.
//!
//! A [`FeedbackProvider`] turns a prompt into a [`ChunkStream`]: a producer
//! thread pushes text chunks into a channel as the service sends them, and a
//! single [`FeedbackSink`] consumes them in order through [`relay`]. There is
//! no cancellation and no retry.

pub mod gemini;
pub mod prompt;

use std::io::Write;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::core::view::{ViewLogic, ViewQuery};
use crate::db::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};

pub use gemini::GeminiProvider;

pub type Chunk = AppResult<String>;

/// Anything able to stream a text answer for a prompt.
pub trait FeedbackProvider {
    fn stream(&self, prompt: &str) -> AppResult<ChunkStream>;
}

/// Consumer side of a feedback stream.
pub trait FeedbackSink {
    fn push(&mut self, chunk: &str) -> AppResult<()>;
    fn finish(&mut self) -> AppResult<()>;
}

/// Ordered chunks produced by a background thread.
pub struct ChunkStream {
    rx: Receiver<Chunk>,
    producer: Option<JoinHandle<()>>,
}

impl ChunkStream {
    /// Run `produce` on its own thread. An error it returns is delivered as
    /// the last item of the stream.
    pub fn spawn<F>(produce: F) -> Self
    where
        F: FnOnce(&Sender<Chunk>) -> AppResult<()> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let producer = thread::spawn(move || {
            if let Err(e) = produce(&tx) {
                let _ = tx.send(Err(e));
            }
        });

        Self {
            rx,
            producer: Some(producer),
        }
    }
}

impl Iterator for ChunkStream {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        match self.rx.recv() {
            Ok(chunk) => Some(chunk),
            Err(_) => {
                // channel closed: the producer is done
                if let Some(handle) = self.producer.take()
                    && handle.join().is_err()
                {
                    return Some(Err(AppError::Other(
                        "feedback producer thread panicked".into(),
                    )));
                }
                None
            }
        }
    }
}

/// Push every chunk into `sink` as it arrives and return the full text.
/// The first error stops the relay; what was already shown stays shown.
pub fn relay(stream: ChunkStream, sink: &mut dyn FeedbackSink) -> AppResult<String> {
    let mut response_text = String::new();

    for chunk in stream {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        sink.push(&chunk)?;
        response_text.push_str(&chunk);
    }

    sink.finish()?;
    Ok(response_text)
}

/// Prints chunks to a writer as soon as they arrive.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> FeedbackSink for TerminalSink<W> {
    fn push(&mut self, chunk: &str) -> AppResult<()> {
        self.out.write_all(chunk.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> AppResult<()> {
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

pub struct FeedbackLogic;

impl FeedbackLogic {
    /// Build the prompt for the view and stream the answer into `sink`.
    ///
    /// An empty view is not an error: nothing is sent, `make_provider` is
    /// never called and `None` is returned.
    pub fn run<F>(
        store: &SessionStore,
        query: &ViewQuery,
        make_provider: F,
        sink: &mut dyn FeedbackSink,
    ) -> AppResult<Option<String>>
    where
        F: FnOnce() -> AppResult<Box<dyn FeedbackProvider>>,
    {
        let entries = ViewLogic::load(store, query)?;
        if entries.is_empty() {
            warning("No data available for feedback.");
            return Ok(None);
        }

        let provider = make_provider()?;
        let prompt = prompt::build_prompt(&entries, query.days_back);

        header("AI Feedback");
        let stream = provider.stream(&prompt)?;
        let text = relay(stream, sink)?;
        Ok(Some(text))
    }
}
