use color_eyre::Result;
use log::{error, info};
use snakepilot::{
    gridworld::models::{GameState, MoveResponse, Status},
    pilot::{Pilot, ShortestPilot},
};
use warp::{http::Method, Filter};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
struct InternalError;
impl warp::reject::Reject for InternalError {}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let healthz = warp::get().and(warp::path::end().map(|| {
        warp::reply::json(&Status {
            name:    NAME.to_owned(),
            version: VERSION.to_owned(),
        })
    }));

    let do_move = warp::post()
        .and(warp::path("move"))
        .and(warp::body::json())
        .and_then(|game_state: GameState| async move {
            ShortestPilot
                .next_turn(&game_state)
                .map(|turn| {
                    if turn.is_none() {
                        info!("boxed in with no safe turn, answering null");
                    }
                    warp::reply::json(&MoveResponse { turn })
                })
                .map_err(|e| {
                    error!("failed to get move: {e}");
                    warp::reject::custom(InternalError)
                })
        });

    let api = healthz.or(do_move).with(cors).with(logging);

    warp::serve(api).run(([0, 0, 0, 0], 6502)).await;

    Ok(())
}
