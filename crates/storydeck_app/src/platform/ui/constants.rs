pub const TITLE: &str = "Storydeck";
pub const SEARCH_BOX_TITLE: &str = "Search";
pub const LOADING_TEXT: &str = "Loading ...";
pub const ERROR_BANNER: &str = "Something went wrong";
pub const NO_RECENT_TEXT: &str = "none yet";
pub const DISMISS_HINT: &str = "x: dismiss";

pub const HELP_NORMAL: &str =
    "/ search  1-5 recent  t/a/c/p sort  n original order  up/down select  x dismiss  m more  q quit";
pub const HELP_EDITING: &str = "Enter: search   Esc: cancel";
