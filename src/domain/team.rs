//! Team-creation wizard state.

use crate::domain::auth::TradingStats;
use crate::domain::errors::{AppError, AppResult};
use derive_more::Display;
use strum::EnumIter;

pub const MAX_TEAM_MEMBERS: usize = 4;
pub const INVITE_CODE_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum TeamLogo {
    #[default]
    #[display(fmt = "🛡️")]
    Shield,
    #[display(fmt = "⚡")]
    Zap,
    #[display(fmt = "🎯")]
    Target,
    #[display(fmt = "🚀")]
    Rocket,
    #[display(fmt = "👥")]
    Users,
}

impl TeamLogo {
    pub fn accent(&self) -> &'static str {
        match self {
            TeamLogo::Shield => "accent-blue",
            TeamLogo::Zap => "accent-yellow",
            TeamLogo::Target => "accent-red",
            TeamLogo::Rocket => "accent-purple",
            TeamLogo::Users => "accent-green",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub email: String,
    pub trading_stats: Option<TradingStats>,
}

/// Eight upper-case base-36 characters
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct InviteCode(String);

impl InviteCode {
    /// Expand a uniform `[0, 1)` sample into base-36 digits
    pub fn from_sample(sample: f64) -> Self {
        let mut frac = sample.clamp(0.0, 1.0 - f64::EPSILON);
        let mut code = String::with_capacity(INVITE_CODE_LEN);
        for _ in 0..INVITE_CODE_LEN {
            frac *= 36.0;
            let digit = frac.floor() as u32;
            frac -= digit as f64;
            code.push(std::char::from_digit(digit.min(35), 36).unwrap_or('0').to_ascii_uppercase());
        }
        Self(code)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Identity = 1,
    Members = 2,
    Invite = 3,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamData {
    pub name: String,
    pub logo: TeamLogo,
    pub members: Vec<TeamMember>,
    pub invite_code: InviteCode,
    pub created_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamStats {
    pub win_rate: f64,
    pub total_trades: u32,
}

impl TeamData {
    /// Invited members plus the creator
    pub fn total_members(&self) -> usize {
        self.members.len() + 1
    }

    /// Average win rate and total trades over members that have traded
    pub fn stats(&self) -> Option<TeamStats> {
        let traded: Vec<&TradingStats> = self
            .members
            .iter()
            .filter_map(|m| m.trading_stats.as_ref())
            .filter(|s| s.total_trades > 0)
            .collect();
        if traded.is_empty() {
            return None;
        }
        Some(TeamStats {
            win_rate: traded.iter().map(|s| s.win_rate).sum::<f64>() / traded.len() as f64,
            total_trades: traded.iter().map(|s| s.total_trades).sum(),
        })
    }
}

/// In-progress wizard form
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDraft {
    pub step: WizardStep,
    pub name: String,
    pub logo: TeamLogo,
    members: Vec<String>,
    invite_code: Option<InviteCode>,
}

impl Default for TeamDraft {
    fn default() -> Self {
        Self {
            step: WizardStep::Identity,
            name: String::new(),
            logo: TeamLogo::default(),
            members: vec![String::new()],
            invite_code: None,
        }
    }
}

impl TeamDraft {
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn invite_code(&self) -> Option<&InviteCode> {
        self.invite_code.as_ref()
    }

    pub fn can_add_member(&self) -> bool {
        self.members.len() < MAX_TEAM_MEMBERS
    }

    pub fn add_member(&mut self) -> AppResult<()> {
        if !self.can_add_member() {
            return Err(AppError::Validation(format!("a team has at most {MAX_TEAM_MEMBERS} members")));
        }
        self.members.push(String::new());
        Ok(())
    }

    pub fn set_member_email(&mut self, index: usize, email: String) -> AppResult<()> {
        let slot = self
            .members
            .get_mut(index)
            .ok_or_else(|| AppError::Validation(format!("no member slot {index}")))?;
        *slot = email;
        Ok(())
    }

    /// Move to the next step; completing the last one yields the team.
    ///
    /// `sample` feeds the invite code generated when leaving the first step,
    /// `now_ms` stamps the created team.
    pub fn advance(&mut self, sample: impl FnOnce() -> f64, now_ms: u64) -> AppResult<Option<TeamData>> {
        match self.step {
            WizardStep::Identity => {
                if self.name.trim().is_empty() {
                    return Err(AppError::Validation("team name is required".to_string()));
                }
                self.invite_code = Some(InviteCode::from_sample(sample()));
                self.step = WizardStep::Members;
                Ok(None)
            }
            WizardStep::Members => {
                self.step = WizardStep::Invite;
                Ok(None)
            }
            WizardStep::Invite => {
                let invite_code = self
                    .invite_code
                    .clone()
                    .ok_or_else(|| AppError::Validation("invite code missing".to_string()))?;
                let members = self
                    .members
                    .iter()
                    .map(|e| e.trim())
                    .filter(|e| !e.is_empty())
                    .map(|e| TeamMember { email: e.to_string(), trading_stats: None })
                    .collect();
                Ok(Some(TeamData {
                    name: self.name.trim().to_string(),
                    logo: self.logo,
                    members,
                    invite_code,
                    created_at: now_ms,
                }))
            }
        }
    }
}
