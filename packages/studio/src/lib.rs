pub mod block;
pub mod buffer;
pub mod compose;
pub mod config;
pub mod error;
pub mod import;
pub mod preview;
pub mod publish;
pub mod serialize;
pub mod state;

pub use block::{reorder, Block, BlockBody, BlockId, BlockKind, BlockList};
pub use buffer::{BufferKind, CodeBuffers};
pub use compose::{compose, merge_blocks_into_markup, ComposedDocument};
pub use config::{LinksConfig, Locale, PreviewMode, StudioConfig};
pub use error::{ConfigError, ImportError};
pub use import::{import_text, Imported, MemorySource, TextSource};
pub use preview::PreviewFrame;
pub use publish::PublishedReference;
pub use serialize::serialize_blocks;
pub use state::StudioState;
