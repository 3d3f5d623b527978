use crate::message::{FromPlayerMessage, ToPlayerMessage};
use crate::round::RoundGenerator;
use crate::session::SessionState;
use crate::validator::AnswerValidator;
use async_std::net::SocketAddr;
use async_std::net::TcpStream;
use async_tungstenite::WebSocketStream;
use futures::*;
use log::*;
use std::sync::Arc;
use tungstenite::Message;

/// One browser connection and the game it is playing
pub struct Player {
    pub name: String,
    pub stream: WebSocketStream<TcpStream>,
    pub address: SocketAddr,
}

impl Player {
    /// Upgrade the connection and wait for the `Initialize` message
    pub async fn accept(stream: TcpStream, address: SocketAddr) -> Option<Self> {
        let mut stream = async_tungstenite::accept_async(stream).await.ok()?;

        let message = { Self::receive_from_player_message(&mut stream).await? };

        match message {
            FromPlayerMessage::Initialize { name } => Some(Player {
                name,
                stream,
                address,
            }),
            _ => None,
        }
    }

    async fn receive_from_player_message(
        stream: &mut WebSocketStream<TcpStream>,
    ) -> Option<FromPlayerMessage> {
        loop {
            let message = stream.next().await?.ok()?;

            if let Message::Text(text) = message {
                match serde_json::from_str::<FromPlayerMessage>(&text) {
                    Ok(message) => return Some(message),
                    Err(e) => warn!("Ignoring malformed message {:?}: {}", text, e),
                }
            }
        }
    }

    pub async fn receive_message(&mut self) -> Option<FromPlayerMessage> {
        Self::receive_from_player_message(&mut self.stream).await
    }

    pub async fn send_message(&mut self, message: ToPlayerMessage) -> Option<()> {
        let value = serde_json::to_string(&message).ok()?;
        self.stream.send(Message::Text(value)).await.ok()
    }

    /// Play until the browser leaves
    ///
    /// The session state lives only in this task. Each message is handled on
    /// the blocking pool since validation waits for the chat service.
    pub async fn run(mut self, generator: Arc<RoundGenerator>, validator: Arc<AnswerValidator>) {
        let mut state = SessionState::new();
        let mut message = FromPlayerMessage::Initialize {
            name: self.name.clone(),
        };

        loop {
            let leaving = message == FromPlayerMessage::Disconnect;

            let generator = generator.clone();
            let validator = validator.clone();
            let (next, replies) = async_std::task::spawn_blocking(move || {
                state.handle(message, &generator, &mut rand::thread_rng(), &validator)
            })
            .await;
            state = next;

            if leaving {
                return;
            }

            for reply in replies {
                if self.send_message(reply).await.is_none() {
                    return;
                }
            }

            message = match self.receive_message().await {
                Some(message) => message,
                None => FromPlayerMessage::Disconnect,
            };
            debug!("Received message from {}: {:?}", self.name, message);
        }
    }
}
