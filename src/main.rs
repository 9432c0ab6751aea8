use macroquad::prelude::*;
use tic_tac_toe::{
    GameState, BoardView,
    application::Event,
    input::{self, Action},
    rendering,
    ui::{WINDOW_HEIGHT, WINDOW_WIDTH},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Tic Tac Toe Game".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Feed one event to the core and mirror the result in the view
fn dispatch(state: &mut GameState, view: &mut BoardView, event: Event) {
    match state.handle(event) {
        Ok(notifications) => notifications.iter().for_each(|n| view.apply(n)),
        Err(err) => log::debug!("ignored {:?}: {}", event, err),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting Tic Tac Toe");

    let mut state = GameState::new();
    let mut view = BoardView::new();

    loop {
        let mouse_pos = mouse_position();

        match input::poll(&view, mouse_pos) {
            Some(Action::Game(event)) => dispatch(&mut state, &mut view, event),
            Some(Action::DismissDialog) => {
                // Closing the dialog starts the next round
                view.close_dialog();
                dispatch(&mut state, &mut view, Event::ResetClicked);
            }
            None => {}
        }

        rendering::draw_screen(&view, mouse_pos);

        next_frame().await;
    }
}
