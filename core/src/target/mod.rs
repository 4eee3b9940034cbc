pub mod codec;
pub mod rect;
pub mod record;

pub use codec::{decode, encode, encode_to_string};
pub use rect::{Point, Rect};
pub use record::TargetRecord;
