#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ticklist::libs::messages::Message;
    use ticklist::libs::task::{PlainTask, SortKey, Task};
    use ticklist::libs::todo::TodoList;
    use ticklist::store::task_file::TaskFile;

    struct TodoTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
        list: TodoList<Task>,
    }

    impl TestContext for TodoTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("todo_list.txt");
            let list = TodoList::new(TaskFile::new(&path));
            TodoTestContext {
                _temp_dir: temp_dir,
                path,
                list,
            }
        }
    }

    impl TodoTestContext {
        fn seed(&self, tasks: &[(&str, i32, bool)]) {
            let tasks: Vec<Task> = tasks
                .iter()
                .map(|(description, priority, completed)| {
                    let mut task = Task::new(description, *priority);
                    task.completed = *completed;
                    task
                })
                .collect();
            self.list.store().save(&tasks).unwrap();
        }

        fn descriptions(&self) -> Vec<String> {
            self.list.tasks().unwrap().into_iter().map(|t| t.description).collect()
        }
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_walkthrough_from_empty_file(ctx: &mut TodoTestContext) {
        assert_eq!(ctx.list.view().unwrap(), Message::NoTasks);

        let added = ctx.list.add("Buy milk", 2).unwrap();
        assert_eq!(added.to_string(), "Task \"Buy milk\" added with priority 2.");
        ctx.list.add("Call mom", 5).unwrap();

        assert_eq!(
            ctx.list.view().unwrap().to_string(),
            "To-Do List:\n1. [✗] (Priority: 2) Buy milk\n2. [✗] (Priority: 5) Call mom"
        );

        assert_eq!(ctx.list.complete(1).unwrap().to_string(), "Task \"Buy milk\" marked as completed.");
        assert_eq!(
            ctx.list.view().unwrap(),
            Message::TaskList(vec![
                "1. [✓] (Priority: 2) Buy milk".to_string(),
                "2. [✗] (Priority: 5) Call mom".to_string(),
            ])
        );

        assert_eq!(ctx.list.sort(SortKey::Priority).unwrap().to_string(), "Tasks sorted by priority.");
        assert_eq!(ctx.descriptions(), vec!["Buy milk", "Call mom"]);

        assert_eq!(ctx.list.delete(2).unwrap().to_string(), "Task \"Call mom\" deleted.");
        assert_eq!(ctx.descriptions(), vec!["Buy milk"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_shifts_later_tasks(ctx: &mut TodoTestContext) {
        ctx.seed(&[("a", 1, false), ("b", 2, false), ("c", 3, false), ("d", 4, false)]);

        assert_eq!(ctx.list.delete(2).unwrap(), Message::TaskDeleted("b".to_string()));
        assert_eq!(ctx.descriptions(), vec!["a", "c", "d"]);

        assert_eq!(ctx.list.delete(2).unwrap(), Message::TaskDeleted("c".to_string()));
        assert_eq!(ctx.descriptions(), vec!["a", "d"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_out_of_range_numbers_leave_file_untouched(ctx: &mut TodoTestContext) {
        ctx.seed(&[("a", 1, false), ("b", 2, true)]);
        let before = fs::read(&ctx.path).unwrap();

        for number in [0, -1, 3, i64::MAX, i64::MIN] {
            assert_eq!(ctx.list.delete(number).unwrap(), Message::InvalidTaskNumber);
            assert_eq!(ctx.list.complete(number).unwrap(), Message::InvalidTaskNumber);
            assert_eq!(ctx.list.edit(number, "x", 1).unwrap(), Message::InvalidTaskNumber);
        }

        assert_eq!(fs::read(&ctx.path).unwrap(), before);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_invalid_number_on_missing_file_creates_nothing(ctx: &mut TodoTestContext) {
        assert_eq!(ctx.list.delete(1).unwrap(), Message::InvalidTaskNumber);
        assert!(!ctx.path.exists());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_edit_overwrites_description_and_priority(ctx: &mut TodoTestContext) {
        ctx.seed(&[("a", 1, true), ("b", 2, false)]);

        assert_eq!(ctx.list.edit(1, "renamed", 9).unwrap().to_string(), "Task 1 updated.");

        let tasks = ctx.list.tasks().unwrap();
        assert_eq!(tasks[0].description, "renamed");
        assert_eq!(tasks[0].priority, 9);
        assert!(tasks[0].completed);
        assert_eq!(tasks[1], Task::new("b", 2));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_add_does_not_check_priority_range(ctx: &mut TodoTestContext) {
        ctx.list.add("later", 42).unwrap();
        assert_eq!(ctx.list.tasks().unwrap()[0].priority, 42);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_descriptions_with_delimiter_are_rejected(ctx: &mut TodoTestContext) {
        assert_eq!(ctx.list.add("milk|eggs", 2).unwrap(), Message::InvalidTaskDescription);
        assert_eq!(ctx.list.add("two\nlines", 2).unwrap(), Message::InvalidTaskDescription);
        assert!(!ctx.path.exists());

        ctx.seed(&[("a", 1, false)]);
        assert_eq!(ctx.list.edit(1, "a|b", 1).unwrap(), Message::InvalidTaskDescription);
        assert_eq!(ctx.descriptions(), vec!["a"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_search_is_case_insensitive(ctx: &mut TodoTestContext) {
        ctx.seed(&[("Call mom", 5, false), ("buy milk", 2, false), ("Milk the cow", 3, true)]);

        let found = ctx.list.search("MILK").unwrap();
        assert_eq!(
            found.to_string(),
            "Tasks containing 'MILK':\n1. [✗] (Priority: 2) buy milk (#2)\n2. [✓] (Priority: 3) Milk the cow (#3)"
        );
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_search_without_matches(ctx: &mut TodoTestContext) {
        ctx.seed(&[("Call mom", 5, false)]);
        assert_eq!(ctx.list.search("bread").unwrap().to_string(), "No tasks found containing 'bread'.");
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_sort_by_priority_is_stable(ctx: &mut TodoTestContext) {
        ctx.seed(&[("c", 3, false), ("a1", 1, false), ("b", 2, true), ("a2", 1, true), ("e", 5, false)]);

        ctx.list.sort(SortKey::Priority).unwrap();

        let tasks = ctx.list.tasks().unwrap();
        assert!(tasks.windows(2).all(|pair| pair[0].priority <= pair[1].priority));
        assert_eq!(ctx.descriptions(), vec!["a1", "a2", "b", "c", "e"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_sort_by_completion_puts_open_tasks_first(ctx: &mut TodoTestContext) {
        ctx.seed(&[("done1", 1, true), ("open1", 4, false), ("done2", 2, true), ("open2", 3, false)]);

        let message = ctx.list.sort(SortKey::Completed).unwrap();
        assert_eq!(message.to_string(), "Tasks sorted by completed.");
        assert_eq!(ctx.descriptions(), vec!["open1", "open2", "done1", "done2"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_plain_list_operations(ctx: &mut TodoTestContext) {
        let plain: TodoList<PlainTask> = TodoList::new(TaskFile::new(&ctx.path));

        assert_eq!(plain.add("buy milk").unwrap().to_string(), "Task \"buy milk\" added.");
        plain.add("call mom").unwrap();
        assert_eq!(plain.view().unwrap().to_string(), "To-Do List:\n1. buy milk\n2. call mom");

        assert_eq!(plain.search("MOM").unwrap().to_string(), "Tasks containing 'MOM':\n1. call mom (#2)");

        assert_eq!(plain.delete(1).unwrap(), Message::TaskDeleted("buy milk".to_string()));
        assert_eq!(fs::read_to_string(&ctx.path).unwrap(), "call mom\n");
    }
}
