use common::filter::FilterError;

use super::find_announcement::AnnouncementNotFound;


/// HTTP status for an API error: 404 for a missing announcement, 400 for an
/// invalid filter, 500 for everything else (catalog I/O, parse failures).
pub fn error_status_code(error: &anyhow::Error) -> u16 {
    if error.downcast_ref::<AnnouncementNotFound>().is_some() {
        404
    } else if error.downcast_ref::<FilterError>().is_some() {
        400
    } else {
        500
    }
}
