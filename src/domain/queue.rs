use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Message<B> {
	pub id:       Uuid,
	pub body:     B,
	/// Failed delivery attempts so far. Non-zero means the message already
	/// holds a queue slot.
	pub attempts: u32,
}

impl<B> Message<B> {
	pub fn with(id: Uuid, body: B) -> Message<B> {
		Message {
			id,
			body,
			attempts: 0,
		}
	}
}

/// Bounded queue whose slots stay taken while a popped message is being
/// worked on, so putting it back never has to wait.
#[async_trait]
pub trait Queue<B>: Send + Sync + 'static {
	/// Waits for the next message; `None` once the queue is closed.
	async fn pop(
		&self,
	) -> Result<Option<Message<B>>, Box<dyn std::error::Error + Send>>;
	/// Takes a free slot, waiting while every slot is in use.
	async fn push(
		&self,
		message: Message<B>,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
	/// Puts a popped message back on the slot it already holds.
	fn requeue(
		&self,
		message: Message<B>,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
	/// Frees the slot of a popped message that is done for good.
	fn release(&self);
	/// Slots in use, queued or in flight.
	fn len(&self) -> usize;
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
