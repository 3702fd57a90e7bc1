pub mod confetti;
pub mod date_gate;
pub mod message_screen;
