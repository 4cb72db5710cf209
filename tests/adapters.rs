use std::collections::{HashMap, VecDeque};

use bst_kit::hash_table::HashTable;
use bst_kit::linked_list::LinkedList;
use bst_kit::queue::Queue;
use bst_kit::stack::Stack;
use bst_kit::Error;
use rand::{thread_rng, Rng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn linked_list_random_op_test() {
    let mut list = LinkedList::new();
    let mut model = Vec::new();
    let mut rng = thread_rng();

    for i in 0..5000 {
        match rng.gen_range(0..5) {
            0 => {
                list.append(i);
                model.push(i);
            }
            1 => {
                list.prepend(i);
                model.insert(0, i);
            }
            2 => {
                // Sometimes one past the end, which is allowed, sometimes further.
                let index = rng.gen_range(0..model.len() + 3);
                if index <= model.len() {
                    assert_eq!(list.add(index, i), Ok(()));
                    model.insert(index, i);
                } else {
                    assert_eq!(
                        list.add(index, i),
                        Err(Error::IndexOutOfBounds {
                            index,
                            len: model.len()
                        })
                    );
                }
            }
            3 => {
                let index = rng.gen_range(0..model.len() + 2);
                if index < model.len() {
                    assert_eq!(list.remove(index), Ok(model.remove(index)));
                } else {
                    assert!(matches!(
                        list.remove(index),
                        Err(Error::IndexOutOfBounds { .. })
                    ));
                }
            }
            _ => {
                let index = rng.gen_range(0..model.len() + 1);
                assert_eq!(list.get(index), model.get(index));
            }
        }
        assert_eq!(list.len(), model.len());
    }

    assert!(list.iter().eq(model.iter()));
}

#[test]
fn queue_and_stack_random_op_test() {
    let mut queue = Queue::new();
    let mut stack = Stack::new();
    let mut queue_model = VecDeque::new();
    let mut stack_model = Vec::new();
    let mut rng = thread_rng();

    for i in 0..5000 {
        if rng.gen_bool(0.55) {
            queue.add(i);
            queue_model.push_back(i);
            stack.push(i);
            stack_model.push(i);
        } else {
            assert_eq!(queue.remove().ok(), queue_model.pop_front());
            assert_eq!(stack.pop().ok(), stack_model.pop());
        }
        assert_eq!(queue.peek(), queue_model.front());
        assert_eq!(stack.peek(), stack_model.last());
        assert_eq!(queue.is_empty(), queue_model.is_empty());
        assert_eq!(stack.len(), stack_model.len());
    }

    while let Some(expected) = queue_model.pop_front() {
        assert_eq!(queue.remove(), Ok(expected));
    }
    assert_eq!(queue.remove(), Err(Error::NoSuchElement));
    stack_model.clear();
    while !stack.is_empty() {
        stack.pop().unwrap();
    }
    assert_eq!(stack.pop(), Err(Error::EmptyStack));
}

#[test]
fn hash_table_random_op_test() {
    init_logger();
    let mut table = HashTable::with_buckets(7);
    let mut model = HashMap::new();
    let mut rng = thread_rng();

    for _ in 0..20_000 {
        let key: u8 = rng.gen();
        if rng.gen_bool(0.6) {
            let value: u32 = rng.gen();
            assert_eq!(table.add(key, value), model.insert(key, value));
        } else {
            assert_eq!(table.remove(&key), model.remove(&key));
        }
        assert_eq!(table.len(), model.len());
    }

    for key in 0..=u8::MAX {
        assert_eq!(table.get(&key), model.get(&key));
    }
}

#[test]
fn hash_table_string_keys() {
    let mut table = HashTable::new();
    for i in 0..100 {
        table.add(i.to_string(), i);
    }

    for i in 0..100 {
        assert_eq!(table.get(&i.to_string()), Some(&i));
    }
    assert_eq!(table.get(&"100".to_string()), None);
}
