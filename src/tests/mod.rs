mod test_degree;
