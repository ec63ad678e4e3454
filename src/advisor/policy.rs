use super::action::Action;
use super::history::History;
use crate::Probability;
use crate::Utility;
use std::collections::BTreeMap;

/// Best historical action per win-probability bucket.
///
/// Buckets are `floor(p × 10)` clamped to 0..=9. Each learning pass throws
/// the old table away and rebuilds from the whole history. An action's
/// score is its summed result over the bucket's record count.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Policy(BTreeMap<usize, Action>);

impl Policy {
    pub fn bucket(p: Probability) -> usize {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        ((p * crate::BUCKETS as Probability) as usize).min(crate::BUCKETS - 1)
    }
    pub fn learn(&mut self, history: &History) {
        let mut totals = BTreeMap::<usize, ([Utility; 3], usize)>::new();
        for record in history.iter() {
            let (sums, n) = totals.entry(Self::bucket(record.win_prob)).or_default();
            sums[record.action as usize] += record.result;
            *n += 1;
        }
        self.0 = totals
            .into_iter()
            .map(|(bucket, (sums, n))| (bucket, Self::best(&sums, n)))
            .collect();
    }
    /// Every action is scored over the whole bucket, so an action never
    /// tried there scores 0. The first of raise, call, fold wins ties.
    fn best(sums: &[Utility; 3], n: usize) -> Action {
        let score = |a: Action| sums[a as usize] / n as Utility;
        [Action::Call, Action::Fold]
            .into_iter()
            .fold(Action::Raise, |top, a| match score(a) > score(top) {
                true => a,
                false => top,
            })
    }
    pub fn get(&self, p: Probability) -> Option<Action> {
        self.0.get(&Self::bucket(p)).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::HandRecord;
    use crate::equity::Position;

    fn record(win_prob: Probability, action: Action, result: Utility) -> HandRecord {
        HandRecord {
            hole: vec![],
            board: vec![],
            win_prob,
            action,
            result,
            position: Position::Middle,
            pot: 100,
            bet: 20,
        }
    }

    #[test]
    fn buckets() {
        assert_eq!(Policy::bucket(0.0), 0);
        assert_eq!(Policy::bucket(0.09), 0);
        assert_eq!(Policy::bucket(0.35), 3);
        assert_eq!(Policy::bucket(0.99), 9);
        assert_eq!(Policy::bucket(1.0), 9);
    }

    #[test]
    fn best_mean_per_bucket() {
        let mut history = History::new(100);
        history.push(record(0.72, Action::Raise, 50.0));
        history.push(record(0.75, Action::Raise, -30.0));
        history.push(record(0.71, Action::Call, 15.0));
        history.push(record(0.21, Action::Fold, 5.0));
        history.push(record(0.22, Action::Call, -20.0));
        history.push(record(0.33, Action::Raise, -40.0));
        let mut policy = Policy::default();
        policy.learn(&history);
        assert_eq!(policy.get(0.70), Some(Action::Raise));
        assert_eq!(policy.get(0.25), Some(Action::Fold));
        assert_eq!(policy.get(0.35), Some(Action::Call));
        assert_eq!(policy.get(0.95), None);
        assert_eq!(policy.len(), 3);
    }

    #[test]
    fn ties_prefer_aggression() {
        let mut history = History::new(100);
        history.push(record(0.5, Action::Fold, 0.0));
        history.push(record(0.5, Action::Call, 0.0));
        history.push(record(0.62, Action::Fold, -10.0));
        history.push(record(0.64, Action::Call, 10.0));
        history.push(record(0.66, Action::Raise, -10.0));
        let mut policy = Policy::default();
        policy.learn(&history);
        assert_eq!(policy.get(0.5), Some(Action::Raise));
        assert_eq!(policy.get(0.6), Some(Action::Call));
    }

    #[test]
    fn untried_actions_score_zero() {
        let mut history = History::new(100);
        history.push(record(0.15, Action::Raise, -5.0));
        history.push(record(0.18, Action::Call, -5.0));
        history.push(record(0.88, Action::Fold, -1.0));
        let mut policy = Policy::default();
        policy.learn(&history);
        assert_eq!(policy.get(0.1), Some(Action::Fold));
        assert_eq!(policy.get(0.8), Some(Action::Raise));
    }

    #[test]
    fn relearning_starts_over() {
        let mut history = History::new(1);
        history.push(record(0.9, Action::Raise, 10.0));
        let mut policy = Policy::default();
        policy.learn(&history);
        history.push(record(0.1, Action::Fold, 5.0));
        policy.learn(&history);
        assert_eq!(policy.get(0.9), None);
        assert_eq!(policy.get(0.1), Some(Action::Fold));
    }
}
