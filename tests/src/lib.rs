mod lottery;
