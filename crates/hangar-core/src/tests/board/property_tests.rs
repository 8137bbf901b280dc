use crate::tests::order;
use crate::{Board, Drag, DragLocation, Status};

use proptest::prelude::*;

fn stage() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::BOARD.to_vec())
}

fn board_with(sizes: &[usize]) -> Board {
    let orders: Vec<_> = Status::BOARD
        .iter()
        .zip(sizes)
        .flat_map(|(stage, size)| (0..*size).map(move |n| order(&format!("{stage}-{n}"), *stage)))
        .collect();
    Board::from_orders(orders)
}

fn assert_contiguous(board: &Board) -> Result<(), TestCaseError> {
    for bucket in board.buckets() {
        for (position, order) in bucket.orders.iter().enumerate() {
            prop_assert_eq!(order.index, Some(position));
            prop_assert_eq!(order.status, bucket.stage);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn given_any_valid_drag_when_applied_then_indices_stay_contiguous(
        sizes in prop::collection::vec(0usize..6, 7),
        from in stage(),
        to in stage(),
        pick in 0usize..6,
        at in 0usize..8,
    ) {
        let mut board = board_with(&sizes);
        let len = board.bucket(from).len();
        prop_assume!(len > 0);
        let source = DragLocation::new(from, pick % len);
        let moved_id = board.bucket(from)[source.index].id.clone();
        let total = board.total();

        board.apply_drag(Drag::new(source, Some(DragLocation::new(to, at)))).unwrap();

        assert_contiguous(&board)?;
        prop_assert_eq!(board.total(), total);
        prop_assert_eq!(board.find(&moved_id).unwrap().status, to);
        prop_assert_eq!(board.repositions().len(), total);
    }

    #[test]
    fn given_same_bucket_drag_when_applied_then_relative_order_matches_splice(
        size in 1usize..8,
        pick in 0usize..8,
        at in 0usize..8,
    ) {
        let mut board = board_with(&[size]);
        let mut expected: Vec<String> =
            board.bucket(Status::Pending).iter().map(|o| o.id.clone()).collect();
        let from = pick % size;
        let item = expected.remove(from);
        expected.insert(at.min(expected.len()), item);

        board
            .apply_drag(Drag::new(
                DragLocation::new(Status::Pending, from),
                Some(DragLocation::new(Status::Pending, at)),
            ))
            .unwrap();

        let actual: Vec<String> =
            board.bucket(Status::Pending).iter().map(|o| o.id.clone()).collect();
        prop_assert_eq!(actual, expected);
        assert_contiguous(&board)?;
    }

    #[test]
    fn given_cancelled_drag_when_applied_then_nothing_changes(
        sizes in prop::collection::vec(0usize..4, 7),
        from in stage(),
        pick in 0usize..4,
    ) {
        let mut board = board_with(&sizes);
        let before = board.clone();

        board.apply_drag(Drag::cancelled(DragLocation::new(from, pick))).unwrap();

        prop_assert_eq!(board, before);
    }
}
