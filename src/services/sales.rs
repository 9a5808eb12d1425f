use std::time::Instant;

use crate::domain::types::SaleId;
use crate::dto::sale::SalePayload;
use crate::repository::{SaleReader, SaleWriter};
use crate::services::{ServiceError, ServiceResult, SubmitOutcome};
use crate::state::sales::SalesManager;

/// Invalidate-and-reload step: fetches the full collection and replaces the
/// displayed list. Used for the initial load and after every mutation.
pub async fn refresh<R>(repo: &R, manager: &mut SalesManager) -> ServiceResult<()>
where
    R: SaleReader + ?Sized,
{
    let sales = repo.list_sales().await.map_err(ServiceError::from)?;
    manager.replace_sales(sales);
    Ok(())
}

/// Runs the submit protocol: recompute every field's error state, and only
/// when the whole draft is valid issue the create or update request (update
/// when an editing id is set), re-fetch the collection, clear the draft and
/// arm the confirmation window.
///
/// On a remote failure the error is propagated and the manager keeps its
/// pre-call state: draft, editing id and list are untouched and no
/// confirmation is shown.
pub async fn submit<R>(
    repo: &R,
    manager: &mut SalesManager,
    now: Instant,
) -> ServiceResult<SubmitOutcome>
where
    R: SaleReader + SaleWriter + ?Sized,
{
    let errors = manager.form().check();
    let clean = errors.is_clean();
    manager.set_errors(errors);
    if !clean {
        log::error!("Failed to validate sale form");
        return Ok(SubmitOutcome::Rejected);
    }

    let payload = SalePayload::try_from(manager.form())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match manager.editing() {
        Some(id) => {
            let id = id.clone();
            repo.update_sale(&id, &payload).await.map_err(|err| {
                log::error!("Failed to update sale {id}: {err}");
                ServiceError::from(err)
            })?;
        }
        None => {
            repo.create_sale(&payload).await.map_err(|err| {
                log::error!("Failed to create sale: {err}");
                ServiceError::from(err)
            })?;
        }
    }

    refresh(repo, manager).await?;
    manager.clear();
    manager.arm_confirmation(now);
    Ok(SubmitOutcome::Accepted)
}

/// Issues a delete-request for the given id, then re-fetches the
/// collection. No confirmation indicator and no undo.
pub async fn delete<R>(repo: &R, manager: &mut SalesManager, id: &SaleId) -> ServiceResult<()>
where
    R: SaleReader + SaleWriter + ?Sized,
{
    repo.delete_sale(id).await.map_err(|err| {
        log::error!("Failed to delete sale {id}: {err}");
        ServiceError::from(err)
    })?;
    refresh(repo, manager).await
}
