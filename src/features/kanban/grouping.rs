use crate::core::models::{Status, StatusKey, Task};

/// One board column: the status and its tasks in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBucket {
    pub status: Status,
    pub tasks: Vec<Task>,
}

impl StatusBucket {
    pub fn key(&self) -> StatusKey {
        self.status.key()
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Buckets in the order the backend returned the statuses.
pub type StatusBuckets = Vec<StatusBucket>;

/// Partitions `tasks` into one bucket per status, matching `task.status_id`
/// against the status name. A task lands in at most one bucket (the first
/// column with that name). Tasks whose status matches no column are left out
/// of every bucket; see [`unmatched`].
pub fn group_by_status(tasks: &[Task], statuses: &[Status]) -> StatusBuckets {
    let keys: Vec<StatusKey> = statuses.iter().map(Status::key).collect();
    let mut buckets: StatusBuckets = statuses
        .iter()
        .map(|status| StatusBucket { status: status.clone(), tasks: Vec::new() })
        .collect();

    for task in tasks {
        if let Some(index) = keys.iter().position(|key| *key == task.status_id) {
            buckets[index].tasks.push(task.clone());
        }
    }

    let grouped: usize = buckets.iter().map(StatusBucket::count).sum();
    if grouped < tasks.len() {
        tracing::debug!(
            dropped = tasks.len() - grouped,
            total = tasks.len(),
            "tasks without a matching status column are hidden"
        );
    }
    buckets
}

/// Tasks that [`group_by_status`] drops because no status name matches.
pub fn unmatched<'a>(tasks: &'a [Task], statuses: &[Status]) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| !statuses.iter().any(|s| s.key() == t.status_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::task::fixtures::task;
    use pretty_assertions::assert_eq;

    fn status(id: &str, name: &str) -> Status {
        Status { id: id.into(), name: name.into() }
    }

    fn ids(bucket: &StatusBucket) -> Vec<&str> {
        bucket.tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn groups_by_name_and_hides_unknown_status() {
        let statuses = vec![status("s1", "TODO"), status("s2", "DONE")];
        let tasks = vec![task("t1", "TODO"), task("t2", "DONE"), task("t3", "UNKNOWN")];

        let buckets = group_by_status(&tasks, &statuses);

        assert_eq!(buckets.len(), 2);
        assert_eq!(ids(&buckets[0]), vec!["t1"]);
        assert_eq!(ids(&buckets[1]), vec!["t2"]);
        assert!(buckets.iter().all(|b| b.tasks.iter().all(|t| t.id != "t3")));
        // Known gap: t3 is silently hidden rather than reported to the user.
        assert_eq!(unmatched(&tasks, &statuses).len(), 1);
    }

    #[test]
    fn status_row_id_is_not_a_match_key() {
        // Tasks carrying the row id ("s1") instead of the name are not grouped.
        let statuses = vec![status("s1", "TODO")];
        let tasks = vec![task("t1", "s1")];
        assert!(group_by_status(&tasks, &statuses)[0].is_empty());
    }

    #[test]
    fn counts_sum_to_total_only_when_every_status_matches() {
        let statuses = vec![status("s1", "TODO"), status("s2", "DOING"), status("s3", "DONE")];
        let all_known = vec![task("a", "DONE"), task("b", "TODO"), task("c", "DOING"), task("d", "TODO")];
        let with_stray = vec![task("a", "DONE"), task("b", "ARCHIVED")];

        let sum = |tasks: &[Task]| group_by_status(tasks, &statuses).iter().map(StatusBucket::count).sum::<usize>();

        assert_eq!(sum(&all_known), all_known.len());
        assert!(unmatched(&all_known, &statuses).is_empty());
        assert!(sum(&with_stray) < with_stray.len());
    }

    #[test]
    fn preserves_input_order_and_is_idempotent() {
        let statuses = vec![status("s1", "TODO")];
        let tasks = vec![task("z", "TODO"), task("a", "TODO"), task("m", "TODO")];

        let first = group_by_status(&tasks, &statuses);
        let second = group_by_status(&tasks, &statuses);

        assert_eq!(ids(&first[0]), vec!["z", "a", "m"]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_tasks_yield_one_empty_bucket_per_status() {
        let statuses = vec![status("s1", "TODO"), status("s2", "DONE")];
        let buckets = group_by_status(&[], &statuses);
        assert_eq!(buckets.len(), 2);
        assert!(buckets.iter().all(StatusBucket::is_empty));
    }

    #[test]
    fn duplicate_status_names_keep_task_in_first_column() {
        let statuses = vec![status("s1", "TODO"), status("s9", "TODO")];
        let buckets = group_by_status(&[task("t1", "TODO")], &statuses);
        assert_eq!(ids(&buckets[0]), vec!["t1"]);
        assert!(buckets[1].is_empty());
    }
}
