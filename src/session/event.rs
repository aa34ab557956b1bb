/// Events arriving from the user interface.
///
/// The frontend translates raw input (form submit, grid click, restart
/// button) into these; the session reacts through
/// [`GameSession::handle`](crate::session::GameSession::handle).
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    SubmitPlayers { first: String, second: String },
    CellClicked(usize),
    Restart,
}
