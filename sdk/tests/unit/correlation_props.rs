//! Property-based tests for request correlation

use gremlin_remote::prelude::*;
use gremlin_remote::testing::MockTransport;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: every submission carries a fresh request id, echoed by its handle
    #[test]
    fn request_ids_are_unique(submissions in 1usize..40) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        let mock = MockTransport::new();
        let connection = DriverRemoteConnection::new(mock.clone());
        let bytecode = Bytecode::new().with_step("V", Vec::<GremlinValue>::new());

        let mut handle_ids = HashSet::new();
        for _ in 0..submissions {
            let traversal = runtime
                .block_on(connection.submit::<GremlinValue, GremlinValue>(&bytecode))
                .expect("submission succeeds");
            handle_ids.insert(traversal.request_id());
        }

        let sent_ids: HashSet<Uuid> = mock.requests().iter().map(|r| r.request_id()).collect();
        prop_assert_eq!(handle_ids.len(), submissions);
        prop_assert_eq!(sent_ids, handle_ids);
    }
}
