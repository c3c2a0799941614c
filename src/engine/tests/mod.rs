mod proj4_engine_tests;
