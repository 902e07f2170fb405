use thiserror::Error;

use crate::model::ranking::{Ranking, RegistrationAmount, RegistrationOverview};

#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    #[error("rankings mix contests or users: expected contest {expected_contest}/user {expected_user}, found contest {found_contest}/user {found_user}")]
    MixedRankings {
        expected_contest: u64,
        expected_user: u64,
        found_contest: u64,
        found_user: u64,
    },
}

/// Folds one user's rankings for a contest into an overview, global score first.
///
/// Returns `Ok(None)` for no rankings. Rankings must all belong to the same
/// contest and user.
pub fn rankings_to_registration_overview(
    rankings: &[Ranking],
) -> Result<Option<RegistrationOverview>, RankingError> {
    let Some(first) = rankings.first() else {
        return Ok(None);
    };

    if let Some(other) = rankings
        .iter()
        .find(|r| r.contest_id != first.contest_id || r.user_id != first.user_id)
    {
        return Err(RankingError::MixedRankings {
            expected_contest: first.contest_id,
            expected_user: first.user_id,
            found_contest: other.contest_id,
            found_user: other.user_id,
        });
    }

    let mut registrations: Vec<RegistrationAmount> = Vec::with_capacity(rankings.len());
    for ranking in rankings {
        let entry = RegistrationAmount {
            language_code: ranking.language_code.clone(),
            amount: ranking.amount,
        };
        if ranking.is_global() {
            registrations.insert(0, entry);
        } else {
            registrations.push(entry);
        }
    }

    Ok(Some(RegistrationOverview {
        contest_id: first.contest_id,
        user_id: first.user_id,
        user_display_name: first.user_display_name.clone(),
        registrations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(language_code: &str, amount: f64) -> Ranking {
        Ranking {
            contest_id: 12,
            user_id: 3,
            user_display_name: "reader".to_string(),
            language_code: language_code.to_string(),
            amount,
        }
    }

    fn order(overview: &RegistrationOverview) -> Vec<(&str, f64)> {
        overview
            .registrations
            .iter()
            .map(|r| (r.language_code.as_str(), r.amount))
            .collect()
    }

    #[test]
    fn test_global_ranking_goes_first() {
        let rankings = vec![ranking("EN", 5.0), ranking("GLO", 12.0), ranking("JA", 3.0)];
        let overview = rankings_to_registration_overview(&rankings).unwrap().unwrap();

        assert_eq!(order(&overview), vec![("GLO", 12.0), ("EN", 5.0), ("JA", 3.0)]);
        assert_eq!(overview.contest_id, 12);
        assert_eq!(overview.user_id, 3);
        assert_eq!(overview.user_display_name, "reader");
    }

    #[test]
    fn test_order_kept_without_global() {
        let rankings = vec![ranking("kor", 1.0), ranking("jpn", 9.0)];
        let overview = rankings_to_registration_overview(&rankings).unwrap().unwrap();
        assert_eq!(order(&overview), vec![("kor", 1.0), ("jpn", 9.0)]);
    }

    #[test]
    fn test_later_global_rankings_are_prepended() {
        let rankings = vec![ranking("jpn", 1.0), ranking("GLO", 2.0), ranking("GLO", 3.0)];
        let overview = rankings_to_registration_overview(&rankings).unwrap().unwrap();
        assert_eq!(order(&overview), vec![("GLO", 3.0), ("GLO", 2.0), ("jpn", 1.0)]);
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(rankings_to_registration_overview(&[]), Ok(None));
    }

    #[test]
    fn test_mixed_users_fail() {
        let mut other = ranking("jpn", 1.0);
        other.user_id = 4;
        let rankings = vec![ranking("GLO", 1.0), other];

        let err = rankings_to_registration_overview(&rankings).unwrap_err();
        assert_eq!(
            err,
            RankingError::MixedRankings {
                expected_contest: 12,
                expected_user: 3,
                found_contest: 12,
                found_user: 4,
            }
        );
    }
}
