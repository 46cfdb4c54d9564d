use std::collections::HashSet;

pub const RECOMMENDATION_LIMIT: usize = 6;

/// An active profile that may be recommended, with the skill names it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub profile_id: i32,
    pub views_count: i32,
    pub skills: Vec<String>,
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Picks up to [`RECOMMENDATION_LIMIT`] profile ids for `subject_id`.
///
/// Without subject skills the most viewed candidates win. Otherwise only
/// candidates sharing at least one skill name (case-insensitively) are kept,
/// ranked by the number of distinct shared names, then views, then id.
pub fn rank_candidates(
    subject_id: i32,
    subject_skills: &[String],
    candidates: Vec<Candidate>,
) -> Vec<i32> {
    let wanted: HashSet<String> = subject_skills
        .iter()
        .map(|s| fold(s))
        .filter(|s| !s.is_empty())
        .collect();

    let mut scored: Vec<(usize, i32, i32)> = candidates
        .into_iter()
        .filter(|c| c.profile_id != subject_id)
        .filter_map(|c| {
            if wanted.is_empty() {
                return Some((0, c.views_count, c.profile_id));
            }
            let matches = c
                .skills
                .iter()
                .map(|s| fold(s))
                .filter(|s| wanted.contains(s))
                .collect::<HashSet<_>>()
                .len();
            (matches > 0).then_some((matches, c.views_count, c.profile_id))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)).then(a.2.cmp(&b.2)));
    scored.dedup_by_key(|s| s.2);

    scored
        .into_iter()
        .take(RECOMMENDATION_LIMIT)
        .map(|(_, _, id)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i32, views: i32, skills: &[&str]) -> Candidate {
        Candidate {
            profile_id: id,
            views_count: views,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_ignore_case() {
        let ranked = rank_candidates(1, &names(&["Python"]), vec![candidate(2, 0, &["python"])]);
        assert_eq!(ranked, vec![2]);
    }

    #[test]
    fn ranks_by_matches_then_views_then_id() {
        let ranked = rank_candidates(
            1,
            &names(&["Rust", "Go", "SQL"]),
            vec![
                candidate(5, 100, &["Rust"]),
                candidate(4, 3, &["rust", "go"]),
                candidate(3, 100, &["SQL"]),
                candidate(2, 7, &["Java"]),
            ],
        );
        assert_eq!(ranked, vec![4, 3, 5]);
    }

    #[test]
    fn duplicate_skill_rows_count_once() {
        let ranked = rank_candidates(
            1,
            &names(&["Rust", "Go"]),
            vec![
                candidate(2, 0, &["Rust", "RUST", "rust"]),
                candidate(3, 0, &["Rust", "Go"]),
            ],
        );
        assert_eq!(ranked, vec![3, 2]);
    }

    #[test]
    fn never_includes_subject_and_caps_results() {
        let candidates = (1..=10).map(|id| candidate(id, id, &[])).collect();
        let ranked = rank_candidates(10, &[], candidates);

        assert_eq!(ranked.len(), RECOMMENDATION_LIMIT);
        assert!(!ranked.contains(&10));
        assert_eq!(ranked[0], 9);
    }

    #[test]
    fn skill_less_subject_falls_back_to_views() {
        let ranked = rank_candidates(
            1,
            &[],
            vec![candidate(3, 5, &[]), candidate(2, 5, &[]), candidate(4, 9, &[])],
        );
        assert_eq!(ranked, vec![4, 2, 3]);
    }
}
