use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Semaphore, mpsc};

use crate::domain::payment::Payment;
use crate::domain::queue::{Message, Queue};

/// Bounded in-process queue of payments waiting for another attempt.
///
/// `capacity` bounds the payments the queue owns, counting those a worker
/// has popped but not finished. A fresh failure parks in `push` while every
/// slot is taken (the router's backpressure point); a worker putting its
/// payment back reuses its slot and never waits, so a pool of workers cannot
/// wedge itself against producers.
#[derive(Clone)]
pub struct RetryQueue {
	slots:    Arc<Semaphore>,
	capacity: usize,
	sender:   mpsc::UnboundedSender<Message<Payment>>,
	receiver: Arc<Mutex<mpsc::UnboundedReceiver<Message<Payment>>>>,
}

impl RetryQueue {
	pub fn new(capacity: usize) -> Self {
		let capacity = capacity.max(1);
		let (sender, receiver) = mpsc::unbounded_channel();
		Self {
			slots: Arc::new(Semaphore::new(capacity)),
			capacity,
			sender,
			receiver: Arc::new(Mutex::new(receiver)),
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}
}

#[async_trait]
impl Queue<Payment> for RetryQueue {
	async fn pop(
		&self,
	) -> Result<Option<Message<Payment>>, Box<dyn std::error::Error + Send>> {
		let mut receiver = self.receiver.lock().await;
		Ok(receiver.recv().await)
	}

	async fn push(
		&self,
		message: Message<Payment>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.slots
			.acquire()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?
			.forget();

		self.requeue(message)
	}

	fn requeue(
		&self,
		message: Message<Payment>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.sender.send(message).map_err(|e| {
			self.release();
			Box::new(e) as Box<dyn std::error::Error + Send>
		})
	}

	fn release(&self) {
		if self.len() > 0 {
			self.slots.add_permits(1);
		}
	}

	fn len(&self) -> usize {
		self.capacity - self.slots.available_permits()
	}
}
