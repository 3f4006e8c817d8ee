pub mod count_moves;
pub mod pvp;
pub mod watch;

pub trait Command {
    fn execute(self);
}
