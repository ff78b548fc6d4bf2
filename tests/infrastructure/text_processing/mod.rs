mod answer_formatter_test;
