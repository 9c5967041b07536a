// tests/stack_test.rs
use lifo_stack::{ContractViolation, Operation, Stack, StackConfig, ViolationPolicy, swap};

// Stacks that unwind on a violation whatever the feature defaults are
fn panicking<T: Default>(size: usize) -> Stack<T> {
    Stack::with_config(
        &StackConfig::new()
            .with_initial_size(size)
            .with_policy(ViolationPolicy::Panic),
    )
}

mod rule_of_five {
    use super::*;

    #[test]
    fn default_constructor() {
        let stack: Stack<String> = Stack::default();

        assert!(stack.is_valid());
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn non_default_constructor() {
        let stack: Stack<String> = Stack::with_size(3);

        assert_eq!(stack.size(), 3);
        assert!(!stack.empty());
    }

    #[test]
    #[should_panic(expected = "Unable to construct Stack instance")]
    fn zero_sized_constructor() {
        let _stack: Stack<String> = panicking(0);
    }

    #[test]
    fn copy_constructor() {
        let mut original: Stack<String> = Stack::new();
        original.push(String::from("source"));

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push(String::from("changed"));
        assert_eq!(original.top(), "source");
        assert_eq!(copy.top(), "changed");
    }

    #[test]
    #[should_panic(expected = "Unable to construct Stack instance from invalid source")]
    fn copy_constructor_from_released() {
        let mut original: Stack<String> = panicking(1);
        original.release();

        let _copy = original.clone();
    }

    #[test]
    fn move_constructor() {
        let mut temporary: Stack<String> = Stack::with_size(1);
        temporary.push(String::from("moved"));

        let stack = temporary.take();

        assert_eq!(stack.top(), "moved");
        assert!(temporary.is_empty());
        assert!(!temporary.is_valid());
    }

    #[test]
    #[should_panic(expected = "Unable to perform top command")]
    fn moved_from_is_unusable() {
        let mut temporary: Stack<String> = panicking(1);
        let _stack = temporary.take();

        temporary.top();
    }

    #[test]
    fn destructor() {
        let mut stack: Stack<String> = Stack::new();

        stack.release();
        stack.release();
        assert!(!stack.is_valid());
    }

    #[test]
    fn copy_assignment() {
        let mut source: Stack<String> = Stack::with_size(2);
        source.push(String::from("top"));
        let mut target: Stack<String> = Stack::new();

        target.clone_from(&source);

        assert_eq!(target.size(), 2);
        assert_eq!(target.top(), "top");
        assert_eq!(source.size(), 2);
    }

    #[test]
    #[should_panic(expected = "Invalid rvalue for the copy assignment")]
    fn copy_assignment_from_released() {
        let mut source: Stack<String> = panicking(1);
        source.release();
        let mut target: Stack<String> = panicking(1);

        target.assign(&source);
    }

    #[test]
    fn move_assignment() {
        let mut stack: Stack<String> = Stack::new();
        let mut temporary: Stack<String> = Stack::with_size(1);
        temporary.push(String::from("adopted"));

        stack.move_from(&mut temporary);

        assert_eq!(stack.top(), "adopted");
        assert!(!temporary.is_valid());
    }

    #[test]
    #[should_panic(expected = "Invalid lvalue for the move assignment")]
    fn move_assignment_into_released() {
        let mut stack: Stack<String> = panicking(1);
        stack.release();
        let mut temporary: Stack<String> = panicking(1);

        stack.move_from(&mut temporary);
    }
}

mod elements_access {
    use super::*;

    #[test]
    fn top() {
        let mut stack: Stack<String> = Stack::with_size(1);
        stack.push(String::from("23"));

        assert_eq!(stack.top(), "23");
    }

    #[test]
    fn top_mut() {
        let mut stack: Stack<String> = Stack::with_size(1);
        stack.top_mut().push_str("23");

        assert_eq!(stack.top(), "23");
    }

    #[test]
    fn try_top_on_empty() {
        let mut stack: Stack<String> = Stack::new();
        stack.pop();

        assert_eq!(
            stack.try_top().err(),
            Some(ContractViolation::Unavailable { operation: Operation::Top })
        );
    }
}

mod capacity {
    use super::*;

    #[test]
    fn empty() {
        let stack: Stack<String> = Stack::new();

        assert!(!stack.empty());
    }

    #[test]
    fn size() {
        let stack: Stack<String> = Stack::with_size(23);

        assert_eq!(stack.size(), 23);
    }

    #[test]
    #[should_panic(expected = "Unable to perform size command")]
    fn size_of_empty() {
        let mut stack: Stack<String> = panicking(1);
        stack.pop();

        stack.size();
    }
}

mod modifiers {
    use super::*;

    #[test]
    fn push_copy() {
        let mut stack: Stack<String> = Stack::new();
        let value = String::from("slaaaay");

        stack.push_cloned(&value);

        assert_eq!(stack.top(), &value);
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn push_move() {
        let mut stack: Stack<String> = Stack::new();

        stack.push(String::from("slaaaay"));

        assert_eq!(stack.top(), "slaaaay");
    }

    #[test]
    fn emplace_copy() {
        let mut stack: Stack<String> = Stack::new();
        let value = String::from("slaaaay");

        stack.emplace_cloned(&value);

        assert_eq!(stack.top(), &value);
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn emplace_move() {
        let mut stack: Stack<String> = Stack::new();

        stack.emplace(String::from("slaaaay"));

        assert_eq!(stack.top(), "slaaaay");
    }

    #[test]
    fn emplace_grows_by_one() {
        let mut stack: Stack<String> = Stack::with_size(1);
        stack.emplace(String::from("a"));
        stack.emplace(String::from("b"));

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.top(), "b");

        stack.pop();
        assert_eq!(stack.top(), "a");
    }

    #[test]
    fn pop() {
        let mut stack: Stack<String> = Stack::with_size(2);
        stack.pop();

        assert_eq!(stack.size(), 1);
    }

    #[test]
    #[should_panic(expected = "Unable to perform pop command")]
    fn pop_empty() {
        let mut stack: Stack<String> = panicking(1);
        stack.pop();
        stack.pop();
    }

    #[test]
    fn swap_stacks() {
        let mut stack_1: Stack<i32> = Stack::with_size(2);
        let mut stack_2: Stack<i32> = Stack::with_size(1);

        stack_1.push(2);
        stack_2.push(3);

        swap(&mut stack_1, &mut stack_2);

        assert_eq!(*stack_1.top(), 3);
        assert_eq!(*stack_2.top(), 2);

        assert_eq!(stack_1.size(), 1);
        assert_eq!(stack_2.size(), 2);
    }

    #[test]
    #[should_panic(expected = "Unable to perform swap command")]
    fn swap_with_released() {
        let mut stack_1: Stack<i32> = panicking(1);
        let mut stack_2: Stack<i32> = panicking(1);
        stack_2.release();

        swap(&mut stack_1, &mut stack_2);
    }
}
