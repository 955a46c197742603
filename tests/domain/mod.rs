mod artifact_id_test;
