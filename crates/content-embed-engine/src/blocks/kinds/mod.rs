pub mod keyword;
pub mod video;

pub use keyword::KeywordBlock;
pub use video::VideoBlock;
