//! Wire types shared between the TA Chatbot client and its backend.

pub mod shared;
pub mod usecases;
