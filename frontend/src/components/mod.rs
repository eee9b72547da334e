pub mod confetti;
pub mod raffle;
pub mod uploader;
pub mod wheel;
