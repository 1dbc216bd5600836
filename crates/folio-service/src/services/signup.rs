//! Signup service
//!
//! Sits behind the identity provider's webhooks: the pre-signup duplicate
//! check and the post-confirmation reconciliation that creates or links the
//! canonical account.

use chrono::Utc;
use folio_core::entities::{Account, Profile};
use folio_core::error::DomainError;
use folio_core::traits::DirectoryIdentity;
use folio_core::value_objects::{AccountId, Handle};
use tracing::{info, instrument, warn};

use crate::dto::{PostConfirmationRequest, PreSignupRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A reconciliation that could not complete.
///
/// Confirmation must never be blocked on our side, so these surface as log
/// warnings rather than webhook failures.
#[derive(Debug)]
pub struct ReconciliationWarning {
    message: String,
}

impl ReconciliationWarning {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ReconciliationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<DomainError> for ReconciliationWarning {
    fn from(err: DomainError) -> Self {
        Self::new(format!("store failure during reconciliation: {err}"))
    }
}

/// Signup service
pub struct SignupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SignupService<'a> {
    /// Create a new SignupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Pre-signup gate: reject signups that would create a second account
    /// for an email we already know.
    ///
    /// Directory lookup failures fail open; blocking every signup on a
    /// directory outage is worse than admitting an occasional duplicate.
    #[instrument(skip(self, request), fields(identity_id = %request.identity_id))]
    pub async fn reject_if_duplicate(&self, request: &PreSignupRequest) -> ServiceResult<()> {
        if request.channel.is_social() && !request.email_verified {
            return Err(DomainError::UnverifiedEmail.into());
        }

        let email = request.email.to_lowercase();
        match self.ctx.identity_directory().find_by_email(&email).await {
            Ok(Some(_)) => {
                // The hint points at the opposite channel: a social signup
                // over an existing email means the original used a password,
                // and vice versa
                let message = if request.channel.is_social() {
                    "An account with this email already exists. Please sign in with your email and password."
                } else {
                    "An account with this email already exists. Please sign in with your social account."
                };
                Err(DomainError::DuplicateEmail(message.to_string()).into())
            }
            Ok(None) => Ok(()),
            Err(err) => {
                warn!(error = %err, "Directory lookup failed; allowing signup");
                Ok(())
            }
        }
    }

    /// Post-confirmation hook: reconcile, log on failure, always succeed.
    #[instrument(skip(self, request), fields(identity_id = %request.identity_id))]
    pub async fn on_identity_confirmed(&self, request: PostConfirmationRequest) {
        if let Err(warning) = self.try_reconcile(&request).await {
            warn!(
                identity_id = %request.identity_id,
                reason = %warning,
                "Signup reconciliation incomplete"
            );
        }
    }

    /// Reconcile a confirmed identity into the canonical account store.
    ///
    /// An existing account for the same email absorbs the new identity id
    /// instead of a second account being created; the original account id
    /// and creation time stay canonical.
    pub async fn try_reconcile(
        &self,
        request: &PostConfirmationRequest,
    ) -> Result<(), ReconciliationWarning> {
        let identity_id = AccountId::new(request.identity_id.clone());
        let email = request
            .email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ReconciliationWarning::new("confirmation carried no email"))?;

        // Social confirmations carry no user-chosen handle attribute
        let is_social = request
            .handle
            .as_deref()
            .is_none_or(|h| h.trim().is_empty());
        let full_name = resolve_full_name(request, email);
        let handle = if is_social {
            Handle::provisional(email, &identity_id)
        } else {
            match request.handle.as_deref() {
                Some(raw) => {
                    Handle::parse(raw).unwrap_or_else(|_| Handle::fallback(&identity_id))
                }
                None => Handle::fallback(&identity_id),
            }
        };

        let mut account = match self.ctx.account_repo().find_by_email(email).await? {
            Some(existing) if existing.id != identity_id => {
                info!(
                    account_id = %existing.id,
                    identity_id = %identity_id,
                    "Linking new identity into existing account"
                );
                existing
            }
            Some(existing) => existing,
            None => Account::new(identity_id.clone(), email, full_name.clone()),
        };

        let canonical_id = account.id.as_str().to_string();
        account.link_identity(&canonical_id);
        account.link_identity(identity_id.as_str());
        account.merge_full_name(&full_name);

        let user_chosen = !is_social && !handle.is_generated();
        match &account.handle {
            None => account.handle = Some(handle.clone()),
            Some(current) if current.is_generated() && user_chosen => {
                account.handle = Some(handle.clone());
            }
            Some(_) => {}
        }

        account.profile_complete = account.profile_complete || !is_social;
        if let Some(picture) = request.picture.as_deref().filter(|p| !p.is_empty()) {
            account.picture_url = Some(picture.to_string());
        }
        if !is_social {
            if let Some(dob) = request.date_of_birth.as_deref().filter(|d| !d.is_empty()) {
                account.date_of_birth = Some(dob.to_string());
            }
        }
        account.touch();
        self.ctx.account_repo().upsert(&account).await?;

        self.ctx
            .identity_directory()
            .record(&DirectoryIdentity {
                identity_id: identity_id.clone(),
                email: email.to_string(),
                channel: request.channel,
            })
            .await?;

        // Social signups get their profile on first completion, not here
        if !is_social {
            self.seed_profile(&mut account, email).await?;
        }

        info!(account_id = %account.id, "Signup reconciled");
        Ok(())
    }

    /// Seed the profile row for a direct signup.
    ///
    /// A handle collision with another account's profile is resolved by
    /// suffixing the account id, and the account record follows the rename.
    async fn seed_profile(
        &self,
        account: &mut Account,
        email: &str,
    ) -> Result<(), ReconciliationWarning> {
        let mut handle = account
            .handle
            .clone()
            .unwrap_or_else(|| Handle::fallback(&account.id));

        let existing = self.ctx.profile_repo().find_by_handle(handle.as_str()).await?;
        let base = match existing {
            Some(profile) if profile.is_owned_by(&account.id) => Some(profile),
            Some(_) => {
                handle = handle.disambiguate(&account.id);
                account.handle = Some(handle.clone());
                account.touch();
                self.ctx.account_repo().upsert(account).await?;
                warn!(handle = %handle, "Handle collision at signup; disambiguated");
                None
            }
            None => None,
        };

        let mut profile =
            base.unwrap_or_else(|| Profile::new(handle, account.id.clone()));
        profile.full_name = account.full_name.clone();
        profile.email = email.to_string();
        profile.date_of_birth = account.date_of_birth.clone();
        if let Some(picture) = &account.picture_url {
            profile.avatar_url = picture.clone();
        }
        profile.updated_at = Utc::now();

        self.ctx.profile_repo().upsert(&profile).await?;
        Ok(())
    }
}

/// Best available display name: explicit full name, then given + family,
/// then the email local part, then a fixed fallback
fn resolve_full_name(request: &PostConfirmationRequest, email: &str) -> String {
    if let Some(name) = request.full_name.as_deref().map(str::trim) {
        if !name.is_empty() {
            return name.to_string();
        }
    }

    let given = request.given_name.as_deref().map(str::trim).unwrap_or("");
    let family = request.family_name.as_deref().map(str::trim).unwrap_or("");
    let joined = [given, family]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        return joined;
    }

    let local = email.split('@').next().unwrap_or_default();
    if !local.is_empty() {
        return local.to_string();
    }

    "User".to_string()
}
