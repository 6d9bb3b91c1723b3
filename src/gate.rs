use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use serenity::model::id::RoleId;
use tracing::info;

pub const DENIED_MESSAGE: &str = "You do not have permission to use this command.";
pub const GRANTED_MESSAGE: &str = "Access granted. The secret is yours.";

/// The roles allowed to receive the secret, fixed once the bot is started
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(HashSet<RoleId>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = RoleId>) -> Self {
        RoleSet(roles.into_iter().collect())
    }

    pub fn contains(&self, role: &RoleId) -> bool {
        self.0.contains(role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of the role check for one interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

impl Decision {
    pub fn message(&self) -> &'static str {
        match self {
            Decision::Allowed => GRANTED_MESSAGE,
            Decision::Denied => DENIED_MESSAGE,
        }
    }
}

/// Does the member hold at least one of the authorized roles?
pub fn has_any_role(member_roles: &[RoleId], role_set: &RoleSet) -> bool {
    member_roles.iter().any(|role| role_set.contains(role))
}

pub fn decide(member_roles: &[RoleId], role_set: &RoleSet) -> Decision {
    if has_any_role(member_roles, role_set) {
        Decision::Allowed
    } else {
        Decision::Denied
    }
}

/// Something able to answer an interaction.
/// `reply` takes the responder by value: an interaction can only be answered once.
#[async_trait]
pub trait Responder {
    async fn reply(self, content: &str, ephemeral: bool) -> Result<()>;
}

/// Check the member roles and send the matching ephemeral reply
pub async fn handle<R: Responder + Send>(
    responder: R,
    member_roles: &[RoleId],
    role_set: &RoleSet,
) -> Result<Decision> {
    let decision = decide(member_roles, role_set);
    info!("Role check result: {decision:?}");
    responder.reply(decision.message(), true).await?;
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use serenity::model::id::RoleId;

    use super::{
        decide, handle, has_any_role, Decision, Responder, RoleSet, DENIED_MESSAGE,
        GRANTED_MESSAGE,
    };

    #[derive(Default, Clone)]
    struct RecordingResponder {
        sent: Arc<Mutex<Vec<(String, bool)>>>,
    }

    #[async_trait]
    impl Responder for RecordingResponder {
        async fn reply(self, content: &str, ephemeral: bool) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((content.to_string(), ephemeral));
            Ok(())
        }
    }

    struct ExpiredInteraction;

    #[async_trait]
    impl Responder for ExpiredInteraction {
        async fn reply(self, _content: &str, _ephemeral: bool) -> Result<()> {
            bail!("Unknown interaction")
        }
    }

    fn roles(ids: &[u64]) -> Vec<RoleId> {
        ids.iter().map(|&id| RoleId(id)).collect()
    }

    fn authorized() -> RoleSet {
        RoleSet::new(roles(&[1, 2, 3, 4]))
    }

    #[test]
    fn no_common_role_is_denied() {
        assert!(!has_any_role(&roles(&[5, 6]), &authorized()));
        assert_eq!(decide(&roles(&[5, 6]), &authorized()), Decision::Denied);
    }

    #[test]
    fn one_common_role_is_allowed() {
        assert!(has_any_role(&roles(&[1]), &authorized()));
        assert_eq!(decide(&roles(&[1]), &authorized()), Decision::Allowed);
    }

    #[test]
    fn no_role_is_denied() {
        assert!(!has_any_role(&[], &authorized()));
    }

    #[test]
    fn all_roles_is_allowed() {
        assert!(has_any_role(&roles(&[1, 2, 3, 4]), &authorized()));
    }

    #[test]
    fn mixed_roles_are_allowed() {
        assert!(has_any_role(&roles(&[9, 8, 4]), &authorized()));
    }

    #[test]
    fn empty_role_set_denies_everyone() {
        assert!(!has_any_role(&roles(&[1, 2]), &RoleSet::default()));
    }

    #[test]
    fn matches_set_intersection() {
        let role_set = authorized();
        let members: [Vec<u64>; 6] = [
            vec![],
            vec![0],
            vec![4],
            vec![3, 7],
            vec![7, 8, 9],
            vec![1, 2],
        ];
        for member in members {
            let member = roles(&member);
            let intersects = member.iter().any(|r| (1..=4).contains(&r.0));
            assert_eq!(has_any_role(&member, &role_set), intersects);
        }
    }

    #[test]
    fn decision_messages() {
        assert_eq!(Decision::Allowed.message(), GRANTED_MESSAGE);
        assert_eq!(Decision::Denied.message(), DENIED_MESSAGE);
    }

    #[tokio::test]
    async fn denied_member_gets_one_ephemeral_denial() {
        let responder = RecordingResponder::default();
        let sent = responder.sent.clone();
        let decision = handle(responder, &roles(&[5, 6]), &authorized())
            .await
            .unwrap();
        assert_eq!(decision, Decision::Denied);
        assert_eq!(*sent.lock().unwrap(), vec![(DENIED_MESSAGE.to_string(), true)]);
    }

    #[tokio::test]
    async fn allowed_member_gets_one_ephemeral_success() {
        let responder = RecordingResponder::default();
        let sent = responder.sent.clone();
        let decision = handle(responder, &roles(&[1]), &authorized())
            .await
            .unwrap();
        assert_eq!(decision, Decision::Allowed);
        assert_eq!(*sent.lock().unwrap(), vec![(GRANTED_MESSAGE.to_string(), true)]);
    }

    #[tokio::test]
    async fn reply_failure_is_surfaced() {
        assert!(handle(ExpiredInteraction, &roles(&[1]), &authorized())
            .await
            .is_err());
    }
}
