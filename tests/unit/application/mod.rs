mod test_mailbox_service;
