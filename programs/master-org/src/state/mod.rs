pub mod master_org;
pub mod org_record;
pub mod organization;
pub mod settings;

pub use master_org::*;
pub use org_record::*;
pub use organization::*;
pub use settings::*;
