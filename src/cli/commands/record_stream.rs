//! Parallel per-line processing with bounded backpressure
//!
//! Raw lines feed a shared work queue; worker tasks each pull a line, run
//! the repair-parse-transform chain, and push the tagged outcome into a
//! bounded channel. The sanitizer and parser are pure and line-local, so
//! workers need no coordination beyond the queue itself. Outcomes carry the
//! source line ordinal so a downstream resequencer can restore input order
//! when deterministic output is required.

use crate::app::models::{Person, RawLine};
use crate::app::services::record_parser::RecordParser;
use crate::app::services::record_processor::RecordProcessor;
use crate::config::Config;
use crate::{Error, Result};

use futures::Stream;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// One line's processing outcome, tagged with its source ordinal
#[derive(Debug)]
pub struct SequencedOutcome {
    /// 1-based line number in the source file (0 only for synthesized
    /// cancellation outcomes, which never reach the resequencer)
    pub line_number: usize,
    /// Parsed and transformed record, or the line-scoped failure
    pub outcome: Result<Person>,
}

/// Statistics aggregated across all workers
#[derive(Debug, Default, Clone)]
pub struct StreamStats {
    pub lines_processed: usize,
    pub records_parsed: usize,
    pub empty_lines: usize,
    pub malformed_records: usize,
    pub tokenizer_faults: usize,
    /// Sampled per-line error messages for reporting, capped in size
    pub errors: Vec<String>,
}

impl StreamStats {
    /// Number of lines that failed to produce a record
    pub fn lines_failed(&self) -> usize {
        self.empty_lines + self.malformed_records + self.tokenizer_faults
    }

    /// Parse success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_processed == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.lines_processed as f64) * 100.0
        }
    }

    fn record_outcome(&mut self, outcome: &SequencedOutcome, max_error_samples: usize) {
        self.lines_processed += 1;
        match &outcome.outcome {
            Ok(_) => self.records_parsed += 1,
            Err(error) => {
                match error {
                    Error::EmptyLine { .. } => self.empty_lines += 1,
                    Error::MalformedRecord { .. } => self.malformed_records += 1,
                    Error::TokenizerFault { .. } => self.tokenizer_faults += 1,
                    _ => {}
                }
                if self.errors.len() < max_error_samples {
                    self.errors.push(error.to_string());
                }
            }
        }
    }
}

/// Parallel record stream processing lines concurrently
///
/// Workers hold the only channel senders, so the stream ends exactly when
/// every worker has drained the queue (or been cancelled) and the channel
/// is empty.
pub struct ParallelRecordStream {
    receiver: mpsc::Receiver<SequencedOutcome>,
    workers: JoinSet<Result<usize>>,
    stats: Arc<tokio::sync::Mutex<StreamStats>>,
    cancellation_token: CancellationToken,
}

impl ParallelRecordStream {
    /// Create a stream and spawn its worker tasks
    pub fn new(lines: Vec<RawLine>, config: &Config, cancellation_token: CancellationToken) -> Self {
        let (sender, receiver) = mpsc::channel(config.channel_capacity);
        let stats = Arc::new(tokio::sync::Mutex::new(StreamStats::default()));
        let work_queue = Arc::new(tokio::sync::Mutex::new(
            lines.into_iter().collect::<VecDeque<_>>(),
        ));

        info!("Spawning {} line-processing workers", config.workers);

        let mut workers = JoinSet::new();
        for worker_id in 0..config.workers {
            let work_queue = work_queue.clone();
            let sender = sender.clone();
            let stats = stats.clone();
            let cancellation_token = cancellation_token.clone();
            let transform = config.transform;
            let max_error_samples = config.max_error_samples;

            workers.spawn(async move {
                Self::worker_task(
                    worker_id,
                    work_queue,
                    transform,
                    max_error_samples,
                    sender,
                    stats,
                    cancellation_token,
                )
                .await
            });
        }

        // Workers own the remaining senders; dropping this one lets the
        // channel close once they finish
        drop(sender);

        Self {
            receiver,
            workers,
            stats,
            cancellation_token,
        }
    }

    /// Worker task pulling lines from the shared queue until it drains
    async fn worker_task(
        worker_id: usize,
        work_queue: Arc<tokio::sync::Mutex<VecDeque<RawLine>>>,
        transform: crate::config::Transform,
        max_error_samples: usize,
        sender: mpsc::Sender<SequencedOutcome>,
        stats: Arc<tokio::sync::Mutex<StreamStats>>,
        cancellation_token: CancellationToken,
    ) -> Result<usize> {
        let parser = RecordParser::new();
        let processor = RecordProcessor::new(transform);
        let mut lines_processed = 0;

        debug!("Worker {} started", worker_id);

        loop {
            if cancellation_token.is_cancelled() {
                debug!("Worker {} cancelled by user", worker_id);
                break;
            }

            let line = {
                let mut queue = work_queue.lock().await;
                match queue.pop_front() {
                    Some(line) => line,
                    None => {
                        debug!("Worker {} finished - no more lines", worker_id);
                        break;
                    }
                }
            };

            let outcome = SequencedOutcome {
                line_number: line.number,
                outcome: parser.parse_line(&line).map(|p| processor.process(p)),
            };
            lines_processed += 1;

            {
                let mut shared_stats = stats.lock().await;
                shared_stats.record_outcome(&outcome, max_error_samples);
            }

            if let Err(error) = &outcome.outcome {
                debug!("Worker {}: {}", worker_id, error);
            }

            if sender.send(outcome).await.is_err() {
                debug!("Worker {} channel closed, stopping", worker_id);
                break;
            }
        }

        debug!("Worker {} completed {} lines", worker_id, lines_processed);
        Ok(lines_processed)
    }

    /// Get the next outcome from any worker
    ///
    /// Returns `None` when all workers have finished and the channel has
    /// drained. On cancellation a synthesized `Interrupted` outcome is
    /// returned so the consumer can abort promptly.
    pub async fn next_outcome(&mut self) -> Option<SequencedOutcome> {
        tokio::select! {
            outcome = self.receiver.recv() => outcome,
            _ = self.cancellation_token.cancelled() => {
                debug!("Record stream cancelled by user");
                Some(SequencedOutcome {
                    line_number: 0,
                    outcome: Err(Error::interrupted("processing cancelled by user")),
                })
            }
        }
    }

    /// Get current processing statistics
    pub async fn stats(&self) -> StreamStats {
        self.stats.lock().await.clone()
    }

    /// Await all workers, surfacing the first worker failure or panic
    pub async fn finish(&mut self) -> Result<()> {
        while let Some(joined) = self.workers.join_next().await {
            match joined {
                Ok(Ok(lines)) => debug!("Worker completed {} lines", lines),
                Ok(Err(error)) => return Err(error),
                Err(join_error) => {
                    return Err(Error::interrupted(format!(
                        "worker task failed: {join_error}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Stream of outcomes in worker completion order
impl Stream for ParallelRecordStream {
    type Item = SequencedOutcome;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

/// Restores source-line order for outcomes arriving out of order
///
/// Relies on the line source producing contiguous ordinals: every physical
/// line yields exactly one outcome, so the next expected ordinal is always
/// eventually pushed and the heap never stalls.
#[derive(Debug)]
pub struct Resequencer {
    next_line: usize,
    pending: BinaryHeap<Reverse<PendingOutcome>>,
}

#[derive(Debug)]
struct PendingOutcome(SequencedOutcome);

impl PartialEq for PendingOutcome {
    fn eq(&self, other: &Self) -> bool {
        self.0.line_number == other.0.line_number
    }
}

impl Eq for PendingOutcome {}

impl PartialOrd for PendingOutcome {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingOutcome {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.line_number.cmp(&other.0.line_number)
    }
}

impl Resequencer {
    /// Create a resequencer expecting `first_line` as the first ordinal
    pub fn new(first_line: usize) -> Self {
        Self {
            next_line: first_line,
            pending: BinaryHeap::new(),
        }
    }

    /// Buffer one outcome and drain every outcome that is now in order
    pub fn push(&mut self, outcome: SequencedOutcome) -> Vec<SequencedOutcome> {
        self.pending.push(Reverse(PendingOutcome(outcome)));

        let mut ready = Vec::new();
        while let Some(Reverse(head)) = self.pending.peek() {
            if head.0.line_number != self.next_line {
                break;
            }
            let Reverse(PendingOutcome(outcome)) = self.pending.pop().unwrap();
            self.next_line += 1;
            ready.push(outcome);
        }
        ready
    }

    /// Outcomes still waiting for an earlier ordinal
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
