pub mod daily_update;
pub mod project;
pub mod record;
pub mod retrospective;
pub mod sprint_goal;
pub mod status;

pub use daily_update::DailyUpdate;
pub use project::Project;
pub use record::{RawRecord, SheetRecord};
pub use retrospective::Retrospective;
pub use sprint_goal::SprintGoal;
pub use status::{Status, StatusStyle};
