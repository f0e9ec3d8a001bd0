//! Challenge quiz handlers

use crate::commands::Cmd;
use crate::messages::ChallengeMsg;
use crate::model::AppModel;

/// Handle challenge messages
pub fn update_challenge(model: &mut AppModel, msg: ChallengeMsg) -> Option<Cmd> {
    match msg {
        ChallengeMsg::Load => {
            let Some(source) = model.config.challenges.source.clone() else {
                tracing::debug!("No challenge source configured");
                return None;
            };
            Some(Cmd::LoadChallenges { source })
        }

        ChallengeMsg::Loaded(Ok(document)) => {
            model
                .ui
                .debug_log
                .push(format!("Loaded {} challenges", document.topics.len()));
            model.challenges.set_document(document);
            Some(Cmd::Redraw)
        }

        ChallengeMsg::Loaded(Err(e)) => {
            tracing::error!("Error loading challenges: {}", e);
            model.ui.debug_log.push(format!("Error loading challenges: {}", e));
            None
        }

        ChallengeMsg::Next => model.challenges.next().then_some(Cmd::Redraw),

        ChallengeMsg::Previous => model.challenges.previous().then_some(Cmd::Redraw),

        ChallengeMsg::Submit(solution) => {
            let verdict = model.challenges.submit(&solution)?;
            model.ui.set_status(verdict.message());
            Some(Cmd::Redraw)
        }
    }
}
