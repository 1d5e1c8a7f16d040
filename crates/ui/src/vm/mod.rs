mod game_vm;
mod num_fmt;
mod tutorial_vm;

pub use game_vm::{GameIntent, GameVm};
pub use num_fmt::{format_rmse2, format_rmse3, format_signed};
pub use tutorial_vm::{ChartBar, TutorialIntent, TutorialVm};
