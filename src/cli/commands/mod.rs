mod accesstoken;
mod badword;
mod boostdoc;
mod config;
mod crawlinginfo;
pub mod crud;
mod dataconfig;
mod duplicatehost;
mod elevateword;
mod fileauth;
mod fileconfig;
mod group;
mod joblog;
mod keymatch;
mod labeltype;
mod pathmap;
mod ping;
mod relatedcontent;
mod relatedquery;
mod reqheader;
mod role;
mod scheduler;
mod user;
mod webauth;
mod webconfig;

pub use accesstoken::AccessTokenCommand;
pub use badword::BadWordCommand;
pub use boostdoc::BoostDocCommand;
pub use config::ConfigCommand;
pub use crud::{CommandContext, RecordCommand};
pub use dataconfig::DataConfigCommand;
pub use duplicatehost::DuplicateHostCommand;
pub use elevateword::ElevateWordCommand;
pub use fileauth::FileAuthCommand;
pub use fileconfig::FileConfigCommand;
pub use group::GroupCommand;
pub use keymatch::KeyMatchCommand;
pub use labeltype::LabelTypeCommand;
pub use pathmap::PathMapCommand;
pub use relatedcontent::RelatedContentCommand;
pub use relatedquery::RelatedQueryCommand;
pub use reqheader::ReqHeaderCommand;
pub use role::RoleCommand;
pub use scheduler::SchedulerCommand;
pub use user::UserCommand;
pub use webauth::WebAuthCommand;
pub use webconfig::WebConfigCommand;

pub use accesstoken::handle_accesstoken;
pub use badword::handle_badword;
pub use boostdoc::handle_boostdoc;
pub use config::handle_config;
pub use crawlinginfo::handle_crawlinginfo;
pub use dataconfig::handle_dataconfig;
pub use duplicatehost::handle_duplicatehost;
pub use elevateword::handle_elevateword;
pub use fileauth::handle_fileauth;
pub use fileconfig::handle_fileconfig;
pub use group::handle_group;
pub use joblog::handle_joblog;
pub use keymatch::handle_keymatch;
pub use labeltype::handle_labeltype;
pub use pathmap::handle_pathmap;
pub use ping::handle_ping;
pub use relatedcontent::handle_relatedcontent;
pub use relatedquery::handle_relatedquery;
pub use reqheader::handle_reqheader;
pub use role::handle_role;
pub use scheduler::handle_scheduler;
pub use user::handle_user;
pub use webauth::handle_webauth;
pub use webconfig::handle_webconfig;
