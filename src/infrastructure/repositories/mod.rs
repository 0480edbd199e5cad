pub mod memory;
pub mod mongo;

pub use memory::InMemoryItemRepository;
pub use mongo::MongoItemRepository;
