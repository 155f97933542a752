//! Admin gate.

use salvo::prelude::*;
use tracing::warn;

use crate::extensions::*;

/// Allow only authenticated administrators through.
///
/// Runs after the auth middleware; a missing identity is answered with 401 and a non-admin
/// identity with 403.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let identity = match depot.identity_or_401() {
        Ok(identity) => identity,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    if !identity.is_admin() {
        warn!(user = %identity.user_uuid, "non-admin denied admin route");

        res.render(StatusError::forbidden().brief("Administrator access required"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
