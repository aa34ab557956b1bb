use hotseat_ttt::session::{GameSession, SessionEvent};

fn main() {
    let mut session = GameSession::new();
    session
        .handle(SessionEvent::SubmitPlayers {
            first: "Alice".into(),
            second: "Bruno".into(),
        })
        .unwrap();

    for cell_index in [4, 5, 8, 0, 7, 1, 6] {
        session.handle(SessionEvent::CellClicked(cell_index)).unwrap();
        if let Some(game) = session.game() {
            println!("{game}");
        }
        println!("{}\n", session.status_message());
    }

    if let Some(clock) = session.clock_display() {
        println!("{clock}");
    }
}
