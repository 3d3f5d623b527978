use crate::player::Player;
use crate::round::RoundGenerator;
use crate::validator::AnswerValidator;
use async_std::net::{SocketAddr, TcpListener};
use log::*;
use std::sync::Arc;

pub mod categories;
pub mod chat;
pub mod config;
pub mod console;
pub mod message;
pub mod player;
pub mod round;
pub mod session;
pub mod validator;

pub async fn run_server(
    address: SocketAddr,
    generator: RoundGenerator,
    validator: AnswerValidator,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, Arc::new(generator), Arc::new(validator)).await;
    Ok(())
}

/// Accept browsers until the listener fails, every one gets its own session
pub async fn serve(
    listener: TcpListener,
    generator: Arc<RoundGenerator>,
    validator: Arc<AnswerValidator>,
) {
    while let Ok((stream, addr)) = listener.accept().await {
        let generator = generator.clone();
        let validator = validator.clone();

        async_std::task::spawn(async move {
            let player = match Player::accept(stream, addr).await {
                Some(v) => v,
                None => return,
            };

            info!("{} ({}) connected", player.name, player.address);
            let name = player.name.clone();

            player.run(generator, validator).await;

            info!("{} ({}) left", name, addr);
        });
    }
}
